#[macro_use]
extern crate serde;

mod chaum_pedersen;
mod config;
mod constants;
mod decryption;
mod elgamal;
mod error;
mod group;
mod hash;
mod hashed_elgamal;
mod key_ceremony;
mod nonces;
mod polynomial;
mod pow_radix;
mod schnorr;
mod serde_hex;
mod util;

pub use chaum_pedersen::*;
pub use config::*;
pub use decryption::*;
pub use elgamal::*;
pub use error::*;
pub use group::*;
pub use hash::*;
pub use hashed_elgamal::*;
pub use key_ceremony::*;
pub use nonces::*;
pub use polynomial::*;
pub use pow_radix::PowRadixOption;
pub use schnorr::*;
pub use serde_hex::*;
pub use util::*;

#[cfg(test)]
mod tests;
