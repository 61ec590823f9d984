//! Hashed ElGamal: a stream cipher for arbitrary bytes, keyed by an ElGamal public key.
//!
//! Used to send secret polynomial values between guardians during the key ceremony.

use crate::*;
use tracing::warn;

const BLOCK_BYTES: usize = 32;
const KDF_LABEL: &str = "share_enc_keys";
const KDF_CONTEXT: &str = "share_encrypt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashedElGamalCiphertext {
    /// `α = g^R`
    pub c0: ElementModP,

    /// Message blocks xor'ed with the key stream
    #[serde(with = "hex_serde")]
    pub c1: Vec<u8>,

    /// MAC over `c0 || c1`
    pub c2: UInt256,

    pub num_bytes: usize,
}

fn kdf_for(alpha: &ElementModP, beta: &ElementModP, num_bytes: usize) -> Kdf {
    let group = alpha.group();
    let key = hash_function(
        group.parameter_base_hash().as_bytes(),
        &[&0x11u8, alpha, beta],
    );
    Kdf::new(key, KDF_LABEL, KDF_CONTEXT, (num_bytes * 8) as u32)
}

/// Encrypt `message` to `public_key` using nonce `R`, which should be random and at least 2.
pub fn hashed_elgamal_encrypt(
    message: &[u8],
    nonce: &ElementModQ,
    public_key: &ElGamalPublicKey,
) -> HashedElGamalCiphertext {
    if nonce.is_zero() {
        panic!("hashed ElGamal encryption requires a non-zero nonce");
    }
    let group = public_key.group();
    let alpha = group.g_pow_p(nonce);
    let beta = public_key.key().pow_p(nonce);

    let kdf = kdf_for(&alpha, &beta, message.len());
    let k0 = kdf.get(0);

    let mut c1 = Vec::with_capacity(message.len() + BLOCK_BYTES);
    for (i, block) in message.chunks(BLOCK_BYTES).enumerate() {
        let mut padded = [0u8; BLOCK_BYTES];
        padded[..block.len()].copy_from_slice(block);
        let encrypted = UInt256::new(padded).xor(&kdf.get(i as u32 + 1));
        c1.extend_from_slice(encrypted.as_bytes());
    }

    let mut mac_input = alpha.to_bytes();
    mac_input.extend_from_slice(&c1);
    let c2 = hmac_sha256(k0.as_bytes(), &mac_input);

    HashedElGamalCiphertext {
        c0: alpha,
        c1,
        c2,
        num_bytes: message.len(),
    }
}

impl HashedElGamalCiphertext {
    /// Decrypt with the recipient's secret key. Returns None if the MAC does not verify.
    pub fn decrypt(&self, secret_key: &ElGamalSecretKey) -> Option<Vec<u8>> {
        if self.c1.len() % BLOCK_BYTES != 0 || self.c1.len() < self.num_bytes {
            warn!("hashed ElGamal ciphertext has a malformed body");
            return None;
        }

        let alpha = &self.c0;
        let beta = alpha.pow_p(secret_key.key());
        let kdf = kdf_for(alpha, &beta, self.num_bytes);
        let k0 = kdf.get(0);

        let mut mac_input = alpha.to_bytes();
        mac_input.extend_from_slice(&self.c1);
        if !hmac_sha256_verify(k0.as_bytes(), &mac_input, &self.c2) {
            warn!("hashed ElGamal decryption failure: MAC doesn't match");
            return None;
        }

        let mut plaintext = Vec::with_capacity(self.c1.len());
        for (i, block) in self.c1.chunks(BLOCK_BYTES).enumerate() {
            let mut bytes = [0u8; BLOCK_BYTES];
            bytes.copy_from_slice(block);
            let decrypted = UInt256::new(bytes).xor(&kdf.get(i as u32 + 1));
            plaintext.extend_from_slice(decrypted.as_bytes());
        }
        plaintext.truncate(self.num_bytes);

        Some(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_various_lengths() {
        let group = GroupContext::tiny();
        let keypair = ElGamalKeypair::random(&group);

        for len in &[0usize, 1, 31, 32, 33, 100] {
            let message: Vec<u8> = (0..*len).map(|i| i as u8).collect();
            let nonce = group.random_element_mod_q(2);
            let ciphertext = hashed_elgamal_encrypt(&message, &nonce, &keypair.public_key);
            assert_eq!(ciphertext.c1.len() % 32, 0);
            assert_eq!(ciphertext.decrypt(&keypair.secret_key), Some(message));
        }
    }

    #[test]
    fn wrong_key_fails_mac() {
        let group = GroupContext::tiny();
        let keypair = ElGamalKeypair::random(&group);
        let other = ElGamalKeypair::random(&group);

        let nonce = group.random_element_mod_q(2);
        let ciphertext = hashed_elgamal_encrypt(b"polynomial value", &nonce, &keypair.public_key);
        assert!(ciphertext.decrypt(&other.secret_key).is_none());
    }

    #[test]
    fn tampering_fails_mac() {
        let group = GroupContext::production_3072();
        let keypair = ElGamalKeypair::random(&group);
        let nonce = group.random_element_mod_q(2);
        let ciphertext = hashed_elgamal_encrypt(&[7u8; 32], &nonce, &keypair.public_key);
        assert_eq!(ciphertext.decrypt(&keypair.secret_key), Some(vec![7u8; 32]));

        let mut tampered = ciphertext.clone();
        tampered.c1[3] ^= 1;
        assert!(tampered.decrypt(&keypair.secret_key).is_none());

        let mut truncated = ciphertext;
        truncated.c1.pop();
        assert!(truncated.decrypt(&keypair.secret_key).is_none());
    }
}
