use num_bigint::BigUint;
use num_enum::TryFromPrimitive;
use num_traits::One;
use tracing::debug;

/// Exponents are always reduced mod Q, so they fit in 256 bits.
const EXPONENT_BITS: usize = 256;

/// Memory / speed tradeoff for fixed-base exponentiation.
///
/// The discriminant is the width in bits of each table slice, so an option can be read from
/// an integer setting with `PowRadixOption::try_from(bits)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum PowRadixOption {
    NoAcceleration = 0,
    LowMemory = 8,
    HighMemory = 12,
    ExtremeMemory = 16,
}

impl PowRadixOption {
    pub fn bits(self) -> usize {
        self as usize
    }
}

impl Default for PowRadixOption {
    fn default() -> Self {
        PowRadixOption::LowMemory
    }
}

/// Precomputed table for raising one fixed base to arbitrary 256-bit exponents.
///
/// Row `i`, column `j` holds `basis^(j * 2^(bits * i))`. An exponent is cut into `bits`-wide
/// slices (least significant first) and the result is the product of one entry per row.
pub(crate) struct PowRadix {
    bits: usize,
    table: Vec<Vec<BigUint>>,
}

impl PowRadix {
    /// Build the table, or return None for `NoAcceleration`.
    pub(crate) fn new(basis: &BigUint, modulus: &BigUint, option: PowRadixOption) -> Option<Self> {
        let bits = option.bits();
        if bits == 0 {
            return None;
        }

        let rows = (EXPONENT_BITS + bits - 1) / bits;
        let columns = 1usize << bits;
        debug!(bits, rows, columns, "building fixed-base exponentiation table");

        let mut table = Vec::with_capacity(rows);
        let mut row_basis = basis % modulus;
        for _ in 0..rows {
            let mut row = Vec::with_capacity(columns);
            let mut running = BigUint::one();
            for _ in 0..columns {
                row.push(running.clone());
                running = (&running * &row_basis) % modulus;
            }
            // running == row_basis^(2^bits), the basis of the next row
            table.push(row);
            row_basis = running;
        }

        Some(PowRadix { bits, table })
    }

    pub(crate) fn pow(&self, exponent: &[u8; 32], modulus: &BigUint) -> BigUint {
        let mut result = BigUint::one();
        for (row, slice) in self.table.iter().zip(exponent_slices(exponent, self.bits)) {
            if slice != 0 {
                result = (&result * &row[slice]) % modulus;
            }
        }
        result
    }
}

/// Split a big-endian 256-bit exponent into `bits`-wide slices, least significant slice first.
fn exponent_slices(exponent: &[u8; 32], bits: usize) -> Vec<usize> {
    let rows = (EXPONENT_BITS + bits - 1) / bits;
    (0..rows)
        .map(|row| {
            let mut slice = 0usize;
            for offset in 0..bits {
                let bit = row * bits + offset;
                if bit >= EXPONENT_BITS {
                    break;
                }
                let byte = exponent[31 - bit / 8];
                if (byte >> (bit % 8)) & 1 == 1 {
                    slice |= 1 << offset;
                }
            }
            slice
        })
        .collect()
}
