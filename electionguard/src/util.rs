use hkdf::Hkdf;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

/// A deterministic CSPRNG derived from secret key material.
///
/// The seed is stretched with HKDF-SHA256 using `info` for domain separation, so one secret can
/// feed several independent generators.
pub fn seeded_rng(secret: &[u8], info: &[u8]) -> ChaCha20Rng {
    let h = Hkdf::<Sha256>::new(None, secret);
    let mut seed = [0u8; 32]; // 256 bits of security
    h.expand(info, &mut seed)
        .expect("32 bytes is a valid HKDF-SHA256 output length");

    ChaCha20Rng::from_seed(seed)
}
