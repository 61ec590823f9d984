//! Exponential ElGamal over the safe-prime group.
//!
//! A message `m` is encrypted as `(g^ξ, K^ξ * g^m)`, so ciphertexts under the same key can be
//! multiplied together to add their plaintexts. Decryption recovers `g^m` and then searches for
//! `m` among small integers.

use crate::*;
use std::ops::Add;

/// A secret key in `[2, Q)`.
#[derive(Clone, PartialEq, Eq)]
pub struct ElGamalSecretKey(ElementModQ);

impl ElGamalSecretKey {
    /// Wrap a secret exponent.
    ///
    /// # Panics
    ///
    /// Panics if the secret is 0 or 1.
    pub fn new(secret: ElementModQ) -> Self {
        if secret.value() < &num_bigint::BigUint::from(2u32) {
            panic!("ElGamal secret key must be in [2, Q)");
        }
        ElGamalSecretKey(secret)
    }

    pub fn key(&self) -> &ElementModQ {
        &self.0
    }
}

// Never print secrets
impl std::fmt::Debug for ElGamalSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElGamalSecretKey(..)")
    }
}

/// A public key `K = g^s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ElGamalPublicKey(ElementModP);

impl ElGamalPublicKey {
    pub fn new(key: ElementModP) -> Self {
        ElGamalPublicKey(key)
    }

    pub fn key(&self) -> &ElementModP {
        &self.0
    }

    pub fn group(&self) -> &GroupContext {
        self.0.group()
    }

    /// The same key with a fixed-base table attached, for keys used to encrypt many messages.
    pub fn accelerate(&self) -> Self {
        ElGamalPublicKey(self.0.accelerate_pow())
    }
}

#[derive(Debug, Clone)]
pub struct ElGamalKeypair {
    pub secret_key: ElGamalSecretKey,
    pub public_key: ElGamalPublicKey,
}

impl ElGamalKeypair {
    /// # Panics
    ///
    /// Panics if the secret is 0 or 1.
    pub fn from_secret(secret: ElementModQ) -> Self {
        let public = secret.group().g_pow_p(&secret);
        ElGamalKeypair {
            secret_key: ElGamalSecretKey::new(secret),
            public_key: ElGamalPublicKey(public),
        }
    }

    pub fn random(group: &GroupContext) -> Self {
        ElGamalKeypair::from_secret(group.random_element_mod_q(2))
    }

    /// Derive a keypair from seed material. The same seed always gives the same keypair.
    pub fn from_seed(group: &GroupContext, seed: &[u8]) -> Self {
        let mut rng = seeded_rng(seed, b"electionguard_elgamal_keypair");
        ElGamalKeypair::from_secret(group.random_element_mod_q_with(&mut rng, 2))
    }

    pub fn group(&self) -> &GroupContext {
        self.public_key.group()
    }
}

/// `(pad, data) = (g^ξ, K^ξ * g^m)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElGamalCiphertext {
    pub pad: ElementModP,
    pub data: ElementModP,
}

impl ElGamalCiphertext {
    pub fn new(pad: ElementModP, data: ElementModP) -> Self {
        ElGamalCiphertext { pad, data }
    }

    /// Decrypt with the secret key, returning None when the plaintext is not a small integer.
    pub fn decrypt(&self, secret_key: &ElGamalSecretKey) -> Option<u32> {
        let blind = self.pad.pow_p(secret_key.key());
        let g_pow_m = self.data.div_p(&blind);
        self.pad.group().dlog_g(&g_pow_m)
    }

    /// Decrypt with the nonce that was used to encrypt, without the secret key.
    pub fn decrypt_with_nonce(
        &self,
        public_key: &ElGamalPublicKey,
        nonce: &ElementModQ,
    ) -> Option<u32> {
        let blind = public_key.key().pow_p(nonce);
        let g_pow_m = self.data.div_p(&blind);
        self.pad.group().dlog_g(&g_pow_m)
    }
}

/// Homomorphic addition. Both ciphertexts must be under the same public key.
impl<'a, 'b> Add<&'b ElGamalCiphertext> for &'a ElGamalCiphertext {
    type Output = ElGamalCiphertext;

    fn add(self, rhs: &'b ElGamalCiphertext) -> ElGamalCiphertext {
        ElGamalCiphertext {
            pad: self.pad.mult_p(&rhs.pad),
            data: self.data.mult_p(&rhs.data),
        }
    }
}

/// Homomorphic sum of ciphertexts. Returns None for an empty input.
pub fn encrypted_sum<'a, I>(ciphertexts: I) -> Option<ElGamalCiphertext>
where
    I: IntoIterator<Item = &'a ElGamalCiphertext>,
{
    let mut iter = ciphertexts.into_iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |sum, ciphertext| &sum + ciphertext))
}

/// Encrypt a small non-negative integer.
///
/// # Panics
///
/// Panics if the nonce is zero, since that would publish the message in the clear.
pub fn elgamal_encrypt(
    message: u32,
    nonce: &ElementModQ,
    public_key: &ElGamalPublicKey,
) -> ElGamalCiphertext {
    if nonce.is_zero() {
        panic!("ElGamal encryption requires a non-zero nonce");
    }
    let group = public_key.group();
    let pad = group.g_pow_p(nonce);
    let g_pow_m = group.g_pow_p(&group.u32_to_element_mod_q(message));
    let data = public_key.key().pow_p(nonce).mult_p(&g_pow_m);
    ElGamalCiphertext { pad, data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trip() {
        let group = GroupContext::tiny();
        let keypair = ElGamalKeypair::random(&group);
        for message in &[0u32, 1, 2, 10, 999] {
            let nonce = group.random_element_mod_q(1);
            let ciphertext = elgamal_encrypt(*message, &nonce, &keypair.public_key);
            assert_eq!(ciphertext.decrypt(&keypair.secret_key), Some(*message));
            assert_eq!(ciphertext.decrypt_with_nonce(&keypair.public_key, &nonce), Some(*message));
        }
    }

    #[test]
    fn round_trip_production_group() {
        let group = GroupContext::production_4096();
        let keypair = ElGamalKeypair::random(&group);
        let nonce = group.random_element_mod_q(1);
        let ciphertext = elgamal_encrypt(42, &nonce, &keypair.public_key.accelerate());
        assert_eq!(ciphertext.decrypt(&keypair.secret_key), Some(42));
    }

    #[test]
    fn decryption_miss_is_none() {
        let group = GroupContext::with_dlog_max(ParameterSet::Tiny, PowRadixOption::LowMemory, 100);
        let keypair = ElGamalKeypair::random(&group);
        let nonce = group.random_element_mod_q(1);
        let ciphertext = elgamal_encrypt(101, &nonce, &keypair.public_key);
        assert_eq!(ciphertext.decrypt(&keypair.secret_key), None);

        let other = ElGamalKeypair::from_secret(keypair.secret_key.key() + &group.one_mod_q());
        let ciphertext = elgamal_encrypt(5, &nonce, &keypair.public_key);
        assert_ne!(ciphertext.decrypt(&other.secret_key), Some(5));
    }

    #[test]
    #[should_panic(expected = "non-zero nonce")]
    fn zero_nonce_panics() {
        let group = GroupContext::tiny();
        let keypair = ElGamalKeypair::random(&group);
        elgamal_encrypt(1, &group.zero_mod_q(), &keypair.public_key);
    }

    #[test]
    #[should_panic(expected = "must be in [2, Q)")]
    fn degenerate_secret_key_panics() {
        let group = GroupContext::tiny();
        ElGamalKeypair::from_secret(group.one_mod_q());
    }

    #[test]
    fn seeded_keypairs_are_reproducible() {
        let group = GroupContext::tiny();
        let a = ElGamalKeypair::from_seed(&group, b"guardian one");
        let b = ElGamalKeypair::from_seed(&group, b"guardian one");
        let c = ElGamalKeypair::from_seed(&group, b"guardian two");
        assert_eq!(a.public_key, b.public_key);
        assert_ne!(a.public_key, c.public_key);
    }

    #[test]
    fn sum_of_ciphertexts() {
        let group = GroupContext::tiny();
        let keypair = ElGamalKeypair::random(&group);
        let messages = [3u32, 0, 7, 1];
        let ciphertexts: Vec<ElGamalCiphertext> = messages
            .iter()
            .map(|m| elgamal_encrypt(*m, &group.random_element_mod_q(1), &keypair.public_key))
            .collect();

        let sum = encrypted_sum(&ciphertexts).unwrap();
        assert_eq!(sum.decrypt(&keypair.secret_key), Some(11));
        assert!(encrypted_sum(&Vec::new()).is_none());
    }

    proptest! {
        #[test]
        fn decrypt_inverts_encrypt(
            message in 0u32..1000,
            nonce in 1u32..u32::MAX,
            secret in 2u32..u32::MAX,
        ) {
            let group = GroupContext::tiny();
            let secret = group.u32_to_element_mod_q(secret % 134_217_687 + 2);
            let keypair = ElGamalKeypair::from_secret(secret);
            let nonce = group.u32_to_element_mod_q(nonce % 134_217_688 + 1);
            let ciphertext = elgamal_encrypt(message, &nonce, &keypair.public_key);
            prop_assert_eq!(ciphertext.decrypt(&keypair.secret_key), Some(message));
            prop_assert_eq!(
                ciphertext.decrypt_with_nonce(&keypair.public_key, &nonce),
                Some(message)
            );
        }

        #[test]
        fn addition_is_homomorphic(p1 in 0u32..500, p2 in 0u32..500) {
            let group = GroupContext::tiny();
            let keypair = ElGamalKeypair::random(&group);
            let c1 = elgamal_encrypt(p1, &group.random_element_mod_q(1), &keypair.public_key);
            let c2 = elgamal_encrypt(p2, &group.random_element_mod_q(1), &keypair.public_key);
            prop_assert_eq!((&c1 + &c2).decrypt(&keypair.secret_key), Some(p1 + p2));
        }
    }
}
