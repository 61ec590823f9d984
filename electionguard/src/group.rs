//! Safe-prime group arithmetic.
//!
//! Every computation in this crate happens in one of two places:
//!   - `ElementModQ`: exponents, in `[0, Q)`.
//!   - `ElementModP`: group elements, in `[0, P)`, where the interesting ones live in the
//!     order-Q subgroup generated by G.
//!
//! A `GroupContext` is a cheap handle over immutable constants. Every element carries the handle
//! it was made with, and any operation mixing elements from incompatible groups panics.

use crate::constants::*;
use crate::pow_radix::PowRadix;
use crate::*;
use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use once_cell::sync::OnceCell;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Byte width of every Q-sized value.
pub const Q_BYTES: usize = 32;

/// Default upper bound for discrete log searches.
pub const DEFAULT_DLOG_MAX: u32 = 100_000;

const PARAMETER_VERSION: &[u8] = b"v2.0.0";

/// Named group parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSet {
    Production4096,
    Production3072,
    /// A 31-bit group. Only good for tests.
    Tiny,
}

impl ParameterSet {
    pub fn name(self) -> &'static str {
        match self {
            ParameterSet::Production4096 => "production-4096",
            ParameterSet::Production3072 => "production-3072",
            ParameterSet::Tiny => "tiny",
        }
    }

    fn p_bytes(self) -> usize {
        match self {
            ParameterSet::Production4096 => 512,
            ParameterSet::Production3072 => 384,
            ParameterSet::Tiny => 4,
        }
    }

    fn constants(self) -> (BigUint, BigUint, BigUint, BigUint) {
        match self {
            ParameterSet::Production4096 => (
                parse_hex_constant(PRODUCTION_4096_P),
                parse_hex_constant(PRODUCTION_4096_Q),
                parse_hex_constant(PRODUCTION_4096_G),
                parse_hex_constant(PRODUCTION_4096_R),
            ),
            ParameterSet::Production3072 => (
                parse_hex_constant(PRODUCTION_3072_P),
                parse_hex_constant(PRODUCTION_3072_Q),
                parse_hex_constant(PRODUCTION_3072_G),
                parse_hex_constant(PRODUCTION_3072_R),
            ),
            ParameterSet::Tiny => (
                BigUint::from(TINY_P),
                BigUint::from(TINY_Q),
                BigUint::from(TINY_G),
                BigUint::from(TINY_R),
            ),
        }
    }
}

impl FromStr for ParameterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4096" | "production-4096" => Ok(ParameterSet::Production4096),
            "3072" | "production-3072" => Ok(ParameterSet::Production3072),
            "tiny" | "test" => Ok(ParameterSet::Tiny),
            other => Err(Error::Config(format!("unknown group parameter set '{}'", other))),
        }
    }
}

fn parse_hex_constant(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).expect("group constants are valid hexidecimal")
}

fn to_fixed_bytes(value: &BigUint, width: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    out
}

struct GroupConstants {
    parameters: ParameterSet,
    p: BigUint,
    q: BigUint,
    g: BigUint,
    r: BigUint,
    p_bytes: usize,
    dlog_max: u32,
    acceleration: PowRadixOption,
    g_radix: OnceCell<Option<PowRadix>>,
    parameter_base_hash: UInt256,
    pow_p_count: AtomicUsize,
}

/// Handle to one set of group parameters.
///
/// Cloning is cheap. Contexts built separately from the same parameter set are compatible.
#[derive(Clone)]
pub struct GroupContext {
    inner: Arc<GroupConstants>,
}

impl GroupContext {
    /// Create a new group context with the default discrete log bound.
    pub fn new(parameters: ParameterSet, acceleration: PowRadixOption) -> Self {
        GroupContext::with_dlog_max(parameters, acceleration, DEFAULT_DLOG_MAX)
    }

    pub fn with_dlog_max(
        parameters: ParameterSet,
        acceleration: PowRadixOption,
        dlog_max: u32,
    ) -> Self {
        let (p, q, g, r) = parameters.constants();
        let p_bytes = parameters.p_bytes();

        // Hp = H(version; 0x00, P, Q, G)
        let mut version = [0u8; 32];
        version[..PARAMETER_VERSION.len()].copy_from_slice(PARAMETER_VERSION);
        let parameter_base_hash = hash_function(
            &version,
            &[
                &0x00u8,
                &to_fixed_bytes(&p, p_bytes),
                &to_fixed_bytes(&q, Q_BYTES),
                &to_fixed_bytes(&g, p_bytes),
            ],
        );

        GroupContext {
            inner: Arc::new(GroupConstants {
                parameters,
                p,
                q,
                g,
                r,
                p_bytes,
                dlog_max,
                acceleration,
                g_radix: OnceCell::new(),
                parameter_base_hash,
                pow_p_count: AtomicUsize::new(0),
            }),
        }
    }

    pub fn production_4096() -> Self {
        GroupContext::new(ParameterSet::Production4096, PowRadixOption::LowMemory)
    }

    pub fn production_3072() -> Self {
        GroupContext::new(ParameterSet::Production3072, PowRadixOption::LowMemory)
    }

    pub fn tiny() -> Self {
        GroupContext::new(ParameterSet::Tiny, PowRadixOption::LowMemory)
    }

    pub fn parameters(&self) -> ParameterSet {
        self.inner.parameters
    }

    pub fn name(&self) -> &'static str {
        self.inner.parameters.name()
    }

    pub fn acceleration(&self) -> PowRadixOption {
        self.inner.acceleration
    }

    /// Byte width of P-sized values.
    pub fn p_bytes(&self) -> usize {
        self.inner.p_bytes
    }

    pub fn q_bytes(&self) -> usize {
        Q_BYTES
    }

    pub fn dlog_max(&self) -> u32 {
        self.inner.dlog_max
    }

    pub fn parameter_base_hash(&self) -> UInt256 {
        self.inner.parameter_base_hash
    }

    pub fn p(&self) -> &BigUint {
        &self.inner.p
    }

    pub fn q(&self) -> &BigUint {
        &self.inner.q
    }

    pub fn g(&self) -> &BigUint {
        &self.inner.g
    }

    /// The cofactor R, where P = Q * R + 1.
    pub fn r(&self) -> &BigUint {
        &self.inner.r
    }

    /// Two contexts are compatible when every constant that feeds a computation or a hash matches.
    pub fn is_compatible(&self, other: &GroupContext) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.p == other.inner.p
                && self.inner.q == other.inner.q
                && self.inner.g == other.inner.g
                && self.inner.p_bytes == other.inner.p_bytes)
    }

    /// Panics if the two contexts are not compatible.
    pub fn assert_compatible(&self, other: &GroupContext) {
        if !self.is_compatible(other) {
            panic!(
                "electionguard: incompatible group contexts ({} vs {})",
                self.name(),
                other.name()
            );
        }
    }

    /// Number of modular exponentiations since the last call. Resets the counter.
    pub fn take_pow_p_count(&self) -> usize {
        self.inner.pow_p_count.swap(0, Ordering::Relaxed)
    }

    fn count_pow_p(&self) {
        self.inner.pow_p_count.fetch_add(1, Ordering::Relaxed);
    }

    fn mod_q(&self, value: BigUint) -> ElementModQ {
        ElementModQ {
            value,
            group: self.clone(),
        }
    }

    fn mod_p(&self, value: BigUint) -> ElementModP {
        ElementModP {
            value,
            group: self.clone(),
            radix: None,
        }
    }

    pub fn zero_mod_q(&self) -> ElementModQ {
        self.mod_q(BigUint::zero())
    }

    pub fn one_mod_q(&self) -> ElementModQ {
        self.mod_q(BigUint::one())
    }

    pub fn two_mod_q(&self) -> ElementModQ {
        self.u32_to_element_mod_q(2)
    }

    pub fn one_mod_p(&self) -> ElementModP {
        self.mod_p(BigUint::one())
    }

    pub fn g_mod_p(&self) -> ElementModP {
        self.mod_p(self.inner.g.clone())
    }

    pub fn u32_to_element_mod_q(&self, value: u32) -> ElementModQ {
        self.mod_q(BigUint::from(value) % &self.inner.q)
    }

    pub fn u32_to_element_mod_p(&self, value: u32) -> ElementModP {
        self.mod_p(BigUint::from(value) % &self.inner.p)
    }

    /// Interpret big-endian bytes as an ElementModQ. Returns None if the value is not below Q.
    pub fn binary_to_element_mod_q(&self, bytes: &[u8]) -> Option<ElementModQ> {
        let value = BigUint::from_bytes_be(bytes);
        if value < self.inner.q {
            Some(self.mod_q(value))
        } else {
            None
        }
    }

    /// Interpret big-endian bytes as an ElementModP. Returns None if the value is not below P.
    pub fn binary_to_element_mod_p(&self, bytes: &[u8]) -> Option<ElementModP> {
        let value = BigUint::from_bytes_be(bytes);
        if value < self.inner.p {
            Some(self.mod_p(value))
        } else {
            None
        }
    }

    /// Reduce arbitrary bytes into `[minimum, Q)`.
    ///
    /// Values that land below `minimum` after reduction have `minimum` added to them.
    pub fn safe_binary_to_element_mod_q(&self, bytes: &[u8], minimum: u32) -> ElementModQ {
        let minimum = BigUint::from(minimum);
        assert!(minimum < self.inner.q, "minimum must be smaller than Q");

        let reduced = BigUint::from_bytes_be(bytes) % &self.inner.q;
        if reduced < minimum {
            self.mod_q(reduced + minimum)
        } else {
            self.mod_q(reduced)
        }
    }

    /// Reduce arbitrary bytes into `[minimum, P)`.
    pub fn safe_binary_to_element_mod_p(&self, bytes: &[u8], minimum: u32) -> ElementModP {
        let minimum = BigUint::from(minimum);
        assert!(minimum < self.inner.p, "minimum must be smaller than P");

        let reduced = BigUint::from_bytes_be(bytes) % &self.inner.p;
        if reduced < minimum {
            self.mod_p(reduced + minimum)
        } else {
            self.mod_p(reduced)
        }
    }

    pub fn element_mod_q_from_hex(&self, hex: &str) -> Result<ElementModQ, Error> {
        let bytes = hex::decode(hex)?;
        self.binary_to_element_mod_q(&bytes)
            .ok_or(Error::OutOfRange("ElementModQ"))
    }

    pub fn element_mod_p_from_hex(&self, hex: &str) -> Result<ElementModP, Error> {
        let bytes = hex::decode(hex)?;
        self.binary_to_element_mod_p(&bytes)
            .ok_or(Error::OutOfRange("ElementModP"))
    }

    /// Uniformly random element in `[minimum, Q)` from the operating system RNG.
    pub fn random_element_mod_q(&self, minimum: u32) -> ElementModQ {
        self.random_element_mod_q_with(&mut OsRng, minimum)
    }

    pub fn random_element_mod_q_with<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        minimum: u32,
    ) -> ElementModQ {
        let mut bytes = [0u8; Q_BYTES];
        rng.fill_bytes(&mut bytes);
        self.safe_binary_to_element_mod_q(&bytes, minimum)
    }

    /// G raised to `exponent`, through the fixed-base table when one is configured.
    pub fn g_pow_p(&self, exponent: &ElementModQ) -> ElementModP {
        self.assert_compatible(&exponent.group);
        self.count_pow_p();

        let radix = self
            .inner
            .g_radix
            .get_or_init(|| PowRadix::new(&self.inner.g, &self.inner.p, self.inner.acceleration));

        let value = match radix {
            Some(radix) => radix.pow(&exponent.to_bytes32(), &self.inner.p),
            None => self.inner.g.modpow(&exponent.value, &self.inner.p),
        };
        self.mod_p(value)
    }

    /// G raised to `-exponent`.
    pub fn g_inv_pow_p(&self, exponent: &ElementModQ) -> ElementModP {
        self.g_pow_p(&exponent.neg_q())
    }

    /// Discrete log base G, searching `[0, dlog_max]`.
    pub fn dlog_g(&self, element: &ElementModP) -> Option<u32> {
        self.dlog_g_max(element, self.inner.dlog_max)
    }

    pub fn dlog_g_max(&self, element: &ElementModP, max: u32) -> Option<u32> {
        self.assert_compatible(&element.group);

        let mut candidate = BigUint::one();
        for exponent in 0..=max {
            if candidate == element.value {
                return Some(exponent);
            }
            candidate = (&candidate * &self.inner.g) % &self.inner.p;
        }
        None
    }
}

impl fmt::Debug for GroupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupContext")
            .field("parameters", &self.inner.parameters)
            .field("acceleration", &self.inner.acceleration)
            .finish()
    }
}

/// An exponent, always in `[0, Q)`.
#[derive(Clone)]
pub struct ElementModQ {
    value: BigUint,
    group: GroupContext,
}

impl ElementModQ {
    pub fn group(&self) -> &GroupContext {
        &self.group
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Fixed-width (32 byte) big-endian encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        to_fixed_bytes(&self.value, Q_BYTES)
    }

    pub fn to_bytes32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.to_bytes());
        out
    }

    pub fn to_uint256(&self) -> UInt256 {
        UInt256::new(self.to_bytes32())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn add_q(&self, other: &ElementModQ) -> ElementModQ {
        self.group.assert_compatible(&other.group);
        self.group.mod_q((&self.value + &other.value) % self.group.q())
    }

    /// `self - other` mod Q.
    pub fn a_minus_b(&self, other: &ElementModQ) -> ElementModQ {
        self.add_q(&other.neg_q())
    }

    pub fn neg_q(&self) -> ElementModQ {
        if self.value.is_zero() {
            self.clone()
        } else {
            self.group.mod_q(self.group.q() - &self.value)
        }
    }

    pub fn mult_q(&self, other: &ElementModQ) -> ElementModQ {
        self.group.assert_compatible(&other.group);
        self.group.mod_q((&self.value * &other.value) % self.group.q())
    }

    /// Multiplicative inverse mod Q. Zero has no inverse and maps to zero.
    pub fn mult_inv_q(&self) -> ElementModQ {
        let q = self.group.q();
        let exponent = q - BigUint::from(2u32);
        self.group.mod_q(self.value.modpow(&exponent, q))
    }

    pub fn div_q(&self, denominator: &ElementModQ) -> ElementModQ {
        self.mult_q(&denominator.mult_inv_q())
    }
}

impl PartialEq for ElementModQ {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.group.is_compatible(&other.group)
    }
}

impl Eq for ElementModQ {}

impl fmt::Debug for ElementModQ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementModQ({})", self.value.to_str_radix(16))
    }
}

impl fmt::Display for ElementModQ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_str_radix(16))
    }
}

/// A group element, always in `[0, P)`.
///
/// An element may carry a fixed-base table (see [`ElementModP::accelerate_pow`]). The table only
/// changes how `pow_p` is computed, never the value, so equality ignores it.
#[derive(Clone)]
pub struct ElementModP {
    value: BigUint,
    group: GroupContext,
    radix: Option<Arc<PowRadix>>,
}

impl ElementModP {
    pub fn group(&self) -> &GroupContext {
        &self.group
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Fixed-width big-endian encoding, `p_bytes` long.
    pub fn to_bytes(&self) -> Vec<u8> {
        to_fixed_bytes(&self.value, self.group.p_bytes())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// True for elements of the order-Q subgroup: `0 < x < P` and `x^Q == 1`.
    pub fn is_valid_residue(&self) -> bool {
        if self.value.is_zero() || self.value >= *self.group.p() {
            return false;
        }
        self.group.count_pow_p();
        self.value.modpow(self.group.q(), self.group.p()).is_one()
    }

    /// Attach a fixed-base table sized by the group's acceleration option.
    pub fn accelerate_pow(&self) -> ElementModP {
        if self.radix.is_some() {
            return self.clone();
        }
        let radix = PowRadix::new(&self.value, self.group.p(), self.group.acceleration());
        ElementModP {
            value: self.value.clone(),
            group: self.group.clone(),
            radix: radix.map(Arc::new),
        }
    }

    pub fn mult_p(&self, other: &ElementModP) -> ElementModP {
        self.group.assert_compatible(&other.group);
        self.group.mod_p((&self.value * &other.value) % self.group.p())
    }

    /// Multiplicative inverse mod P. P is prime so `x^(P-2)` is the inverse of any nonzero x.
    pub fn mult_inv_p(&self) -> ElementModP {
        let p = self.group.p();
        let exponent = p - BigUint::from(2u32);
        self.group.mod_p(self.value.modpow(&exponent, p))
    }

    pub fn div_p(&self, denominator: &ElementModP) -> ElementModP {
        self.mult_p(&denominator.mult_inv_p())
    }

    pub fn pow_p(&self, exponent: &ElementModQ) -> ElementModP {
        self.group.assert_compatible(&exponent.group);
        self.group.count_pow_p();

        let value = match &self.radix {
            Some(radix) => radix.pow(&exponent.to_bytes32(), self.group.p()),
            None => self.value.modpow(&exponent.value, self.group.p()),
        };
        self.group.mod_p(value)
    }
}

impl PartialEq for ElementModP {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.group.is_compatible(&other.group)
    }
}

impl Eq for ElementModP {}

impl fmt::Debug for ElementModP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementModP({})", self.value.to_str_radix(16))
    }
}

impl fmt::Display for ElementModP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_str_radix(16))
    }
}

impl<'a, 'b> Add<&'b ElementModQ> for &'a ElementModQ {
    type Output = ElementModQ;

    fn add(self, rhs: &'b ElementModQ) -> ElementModQ {
        self.add_q(rhs)
    }
}

impl<'a, 'b> Sub<&'b ElementModQ> for &'a ElementModQ {
    type Output = ElementModQ;

    fn sub(self, rhs: &'b ElementModQ) -> ElementModQ {
        self.a_minus_b(rhs)
    }
}

impl<'a, 'b> Mul<&'b ElementModQ> for &'a ElementModQ {
    type Output = ElementModQ;

    fn mul(self, rhs: &'b ElementModQ) -> ElementModQ {
        self.mult_q(rhs)
    }
}

impl<'a> Neg for &'a ElementModQ {
    type Output = ElementModQ;

    fn neg(self) -> ElementModQ {
        self.neg_q()
    }
}

impl<'a, 'b> Mul<&'b ElementModP> for &'a ElementModP {
    type Output = ElementModP;

    fn mul(self, rhs: &'b ElementModP) -> ElementModP {
        self.mult_p(rhs)
    }
}

impl<'a, 'b> Div<&'b ElementModP> for &'a ElementModP {
    type Output = ElementModP;

    fn div(self, rhs: &'b ElementModP) -> ElementModP {
        self.div_p(rhs)
    }
}
