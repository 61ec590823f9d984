//! The hash function H, which is HMAC-SHA256 keyed by a 32-byte context hash.
//!
//! Inputs are byte strings built by concatenating hash elements in argument order:
//!   - `u8`: a single byte, used for domain separation tags.
//!   - `u32` / `usize`: four bytes, big-endian.
//!   - `str` / `String`: UTF-8 bytes.
//!   - `UInt256` and `ElementModQ`: 32 bytes.
//!   - `ElementModP`: `p_bytes` bytes.
//!   - slices and vectors of any of the above, flattened.

use crate::*;
use hmac::{Hmac, Mac, NewMac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// A 256-bit value, the output of H.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt256([u8; 32]);

impl UInt256 {
    pub const ZERO: UInt256 = UInt256([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        UInt256(bytes)
    }

    /// Left-pad up to 32 big-endian bytes. Returns None for longer input.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > 32 {
            return None;
        }
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(bytes);
        Some(UInt256(out))
    }

    pub fn from_u32(value: u32) -> Self {
        let mut out = [0u8; 32];
        out[28..].copy_from_slice(&value.to_be_bytes());
        UInt256(out)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Reduce mod Q. Safe for any value.
    pub fn to_element_mod_q(&self, group: &GroupContext) -> ElementModQ {
        group.safe_binary_to_element_mod_q(&self.0, 0)
    }

    pub fn xor(&self, other: &UInt256) -> UInt256 {
        let mut out = [0u8; 32];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.0[i] ^ other.0[i];
        }
        UInt256(out)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for UInt256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex())
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Something that can be fed to H.
pub trait HashElement {
    /// Feed this element's canonical bytes to `sink`.
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8]));

    /// Feed a slice of elements, in order.
    fn hash_slice(items: &[Self], sink: &mut dyn FnMut(&[u8]))
    where
        Self: Sized,
    {
        for item in items {
            item.hash_input(sink);
        }
    }
}

impl HashElement for u8 {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(&[*self])
    }

    fn hash_slice(items: &[u8], sink: &mut dyn FnMut(&[u8])) {
        sink(items)
    }
}

impl HashElement for u32 {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(&self.to_be_bytes())
    }
}

impl HashElement for usize {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        assert!(*self <= i32::MAX as usize, "hashed integers must be below 2^31");
        sink(&(*self as u32).to_be_bytes())
    }
}

impl HashElement for str {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self.as_bytes())
    }
}

impl HashElement for String {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(self.as_bytes())
    }
}

impl HashElement for UInt256 {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(&self.0)
    }
}

impl HashElement for ElementModQ {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(&self.to_bytes())
    }
}

impl HashElement for ElementModP {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        sink(&self.to_bytes())
    }
}

impl<T: HashElement> HashElement for [T] {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        T::hash_slice(self, sink)
    }
}

impl<T: HashElement> HashElement for Vec<T> {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        T::hash_slice(self, sink)
    }
}

impl<T: HashElement + ?Sized> HashElement for &T {
    fn hash_input(&self, sink: &mut dyn FnMut(&[u8])) {
        (**self).hash_input(sink)
    }
}

/// Incremental H. Feeding elements one at a time is the same as hashing their concatenation.
pub struct HashState {
    mac: HmacSha256,
}

impl HashState {
    pub fn new(key: &[u8]) -> Self {
        HashState {
            mac: HmacSha256::new_from_slice(key).expect("HMAC can take a key of any size"),
        }
    }

    pub fn update(&mut self, element: &dyn HashElement) -> &mut Self {
        let mac = &mut self.mac;
        element.hash_input(&mut |bytes| mac.update(bytes));
        self
    }

    pub fn finish(self) -> UInt256 {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.mac.finalize().into_bytes());
        UInt256(out)
    }
}

/// H(key; elements...)
pub fn hash_function(key: &[u8], elements: &[&dyn HashElement]) -> UInt256 {
    let mut state = HashState::new(key);
    for element in elements {
        state.update(*element);
    }
    state.finish()
}

/// H computed over the fully concatenated input in one call.
pub fn hash_function_concat(key: &[u8], elements: &[&dyn HashElement]) -> UInt256 {
    let mut buffer = Vec::new();
    for element in elements {
        element.hash_input(&mut |bytes| buffer.extend_from_slice(bytes));
    }
    hmac_sha256(key, &buffer)
}

/// Plain HMAC-SHA256 of a byte string.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> UInt256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take a key of any size");
    mac.update(message);
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    UInt256(out)
}

/// Constant-time check of an HMAC-SHA256 tag.
pub fn hmac_sha256_verify(key: &[u8], message: &[u8], tag: &UInt256) -> bool {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take a key of any size");
    mac.update(message);
    mac.verify(tag.as_bytes()).is_ok()
}

/// NIST SP 800-108 key derivation in counter mode, with HMAC-SHA256 as the PRF.
///
/// `K(i) = HMAC(key, [i] || label || 0x00 || context || [length_in_bits])`, with the integers
/// encoded as four big-endian bytes.
pub struct Kdf {
    key: UInt256,
    label: Vec<u8>,
    context: Vec<u8>,
    length_in_bits: u32,
}

impl Kdf {
    pub fn new(key: UInt256, label: &str, context: &str, length_in_bits: u32) -> Self {
        Kdf {
            key,
            label: label.as_bytes().to_vec(),
            context: context.as_bytes().to_vec(),
            length_in_bits,
        }
    }

    pub fn get(&self, index: u32) -> UInt256 {
        let mut input = Vec::with_capacity(4 + self.label.len() + 1 + self.context.len() + 4);
        input.extend_from_slice(&index.to_be_bytes());
        input.extend_from_slice(&self.label);
        input.push(0);
        input.extend_from_slice(&self.context);
        input.extend_from_slice(&self.length_in_bits.to_be_bytes());
        hmac_sha256(self.key.as_bytes(), &input)
    }
}
