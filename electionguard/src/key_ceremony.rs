use crate::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Domain separation tag for the extended base hash.
const EXTENDED_BASE_HASH_TAG: u8 = 0x12;

/// A guardian's public record: its coefficient commitments, each with a Schnorr proof.
///
/// This is what a guardian sends to the others at the start of the key ceremony, and what ends
/// up in the election record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guardian {
    pub guardian_id: String,
    pub x_coordinate: u32,
    pub coefficient_proofs: Vec<SchnorrProof>,
}

impl Guardian {
    /// The guardian's own public key, `K_i0`.
    ///
    /// # Panics
    ///
    /// Panics if the record has no coefficient proofs. `validate` rejects such records.
    pub fn public_key(&self) -> ElGamalPublicKey {
        ElGamalPublicKey::new(self.coefficient_proofs[0].public_key.clone())
    }

    pub fn coefficient_commitments(&self) -> Vec<ElementModP> {
        self.coefficient_proofs
            .iter()
            .map(|proof| proof.public_key.clone())
            .collect()
    }

    /// Check every coefficient proof. A record needs at least one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.coefficient_proofs.is_empty() {
            return Err(ValidationError::WrongNumberOfCoefficients(
                self.guardian_id.clone(),
                1,
                0,
            ));
        }
        for (index, proof) in self.coefficient_proofs.iter().enumerate() {
            if proof.validate(self.x_coordinate, index as u32).is_err() {
                return Err(ValidationError::SchnorrInvalid {
                    guardian: self.guardian_id.clone(),
                    coefficient: index,
                });
            }
        }
        Ok(())
    }
}

/// `P_i(ℓ)` encrypted for guardian ℓ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedKeyShare {
    /// Guardian i, who owns the polynomial
    pub polynomial_owner: String,
    pub owner_x_coordinate: u32,
    /// Guardian ℓ, who receives the value
    pub secret_share_for: String,
    pub encrypted_coordinate: HashedElGamalCiphertext,
}

/// `P_i(ℓ)` in the clear. Published when an encrypted share is disputed, so anyone can check
/// it against the owner's commitments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyShare {
    pub polynomial_owner: String,
    pub owner_x_coordinate: u32,
    pub secret_share_for: String,
    pub y_coordinate: ElementModQ,
}

/// A guardian's running total of polynomial values received from the other guardians.
///
/// Owned by exactly one trustee and finalized once into its key share.
pub struct KeyShareAccumulator {
    own_value: ElementModQ,
    received: BTreeMap<String, ElementModQ>,
}

impl KeyShareAccumulator {
    pub fn new(own_value: ElementModQ) -> Self {
        KeyShareAccumulator {
            own_value,
            received: BTreeMap::new(),
        }
    }

    /// Record the value from `owner`, replacing any earlier one.
    pub fn add(&mut self, owner: &str, value: ElementModQ) {
        self.received.insert(owner.to_owned(), value);
    }

    pub fn contains(&self, owner: &str) -> bool {
        self.received.contains_key(owner)
    }

    /// `P(ℓ) = P_ℓ(ℓ) + Σ P_i(ℓ) mod Q`
    pub fn total(&self) -> ElementModQ {
        self.received
            .values()
            .fold(self.own_value.clone(), |sum, value| &sum + value)
    }

    pub fn finish(self) -> ElementModQ {
        self.total()
    }
}

/// A guardian during the key ceremony. Knows its own secret polynomial, so it must stay private.
pub struct KeyCeremonyTrustee {
    group: GroupContext,
    id: String,
    x_coordinate: u32,
    quorum: usize,
    polynomial: ElectionPolynomial,

    // Other guardians' public records, by guardian id
    other_public_keys: BTreeMap<String, Guardian>,

    // Shares of my polynomial I have made for others, by recipient id
    my_shares_for_others: BTreeMap<String, KeyShare>,

    // Shares of other polynomials sent to me
    accumulator: KeyShareAccumulator,
}

impl KeyCeremonyTrustee {
    /// Create a new trustee with a fresh random polynomial.
    ///
    /// # Panics
    ///
    /// Panics if the id is empty, the x-coordinate is zero, or the quorum is zero.
    pub fn new(group: &GroupContext, id: &str, x_coordinate: u32, quorum: usize) -> Self {
        let polynomial = ElectionPolynomial::generate(group, id, x_coordinate, quorum);
        KeyCeremonyTrustee::from_polynomial(group, polynomial)
    }

    pub fn from_polynomial(group: &GroupContext, polynomial: ElectionPolynomial) -> Self {
        if polynomial.guardian_id.is_empty() {
            panic!("Guardian id cannot be empty");
        }
        if polynomial.x_coordinate == 0 {
            panic!("Guardian x-coordinate cannot be zero");
        }
        if polynomial.quorum() == 0 {
            panic!("Quorum cannot be zero");
        }

        let own_value = polynomial.value_at(polynomial.x_coordinate);
        KeyCeremonyTrustee {
            group: group.clone(),
            id: polynomial.guardian_id.clone(),
            x_coordinate: polynomial.x_coordinate,
            quorum: polynomial.quorum(),
            polynomial,
            other_public_keys: BTreeMap::new(),
            my_shares_for_others: BTreeMap::new(),
            accumulator: KeyShareAccumulator::new(own_value),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x_coordinate(&self) -> u32 {
        self.x_coordinate
    }

    pub fn election_public_key(&self) -> ElGamalPublicKey {
        self.polynomial.public_key()
    }

    pub fn public_keys(&self) -> Guardian {
        Guardian {
            guardian_id: self.id.clone(),
            x_coordinate: self.x_coordinate,
            coefficient_proofs: self.polynomial.coefficient_proofs.clone(),
        }
    }

    /// Receive and check another guardian's public record.
    pub fn receive_public_keys(&mut self, public_keys: Guardian) -> Result<(), Error> {
        if public_keys.guardian_id == self.id {
            return Err(Error::KeyCeremony(format!(
                "cant send '{}' public keys to itself",
                self.id
            )));
        }
        if public_keys.x_coordinate == 0 || public_keys.x_coordinate == self.x_coordinate {
            return Err(Error::KeyCeremony(format!(
                "{} receive_public_keys from '{}': invalid x-coordinate {}",
                self.id, public_keys.guardian_id, public_keys.x_coordinate
            )));
        }
        if public_keys.coefficient_proofs.len() != self.quorum {
            return Err(ValidationError::WrongNumberOfCoefficients(
                public_keys.guardian_id.clone(),
                self.quorum,
                public_keys.coefficient_proofs.len(),
            )
            .into());
        }
        for proof in &public_keys.coefficient_proofs {
            self.group.assert_compatible(proof.public_key.group());
        }
        public_keys.validate()?;

        debug!(trustee = %self.id, from = %public_keys.guardian_id, "received public keys");
        self.other_public_keys
            .insert(public_keys.guardian_id.clone(), public_keys);
        Ok(())
    }

    /// Evaluate my polynomial at another guardian's x-coordinate and encrypt it to them.
    pub fn encrypted_key_share_for(
        &mut self,
        other_guardian: &str,
    ) -> Result<EncryptedKeyShare, Error> {
        let other = self
            .other_public_keys
            .get(other_guardian)
            .ok_or_else(|| Error::UnknownGuardian(other_guardian.to_owned()))?;

        // P_i(ℓ)
        let y_coordinate = self.polynomial.value_at(other.x_coordinate);
        let nonce = self.group.random_element_mod_q(2);
        let encrypted_coordinate =
            hashed_elgamal_encrypt(&y_coordinate.to_bytes(), &nonce, &other.public_key());

        // keep it around in case the share is disputed
        self.my_shares_for_others.insert(
            other_guardian.to_owned(),
            KeyShare {
                polynomial_owner: self.id.clone(),
                owner_x_coordinate: self.x_coordinate,
                secret_share_for: other_guardian.to_owned(),
                y_coordinate,
            },
        );

        Ok(EncryptedKeyShare {
            polynomial_owner: self.id.clone(),
            owner_x_coordinate: self.x_coordinate,
            secret_share_for: other_guardian.to_owned(),
            encrypted_coordinate,
        })
    }

    /// Decrypt a share of another guardian's polynomial and check it against their commitments.
    pub fn receive_encrypted_key_share(&mut self, share: &EncryptedKeyShare) -> Result<(), Error> {
        if share.secret_share_for != self.id {
            return Err(Error::KeyCeremony(format!(
                "share for '{}' was sent to '{}'",
                share.secret_share_for, self.id
            )));
        }

        let bytes = share
            .encrypted_coordinate
            .decrypt(&self.polynomial.secret_key())
            .ok_or_else(|| {
                Error::KeyCeremony(format!(
                    "trustee '{}' couldnt decrypt key share from '{}'",
                    self.id, share.polynomial_owner
                ))
            })?;
        let y_coordinate = self
            .group
            .binary_to_element_mod_q(&bytes)
            .ok_or(Error::OutOfRange("key share"))?;

        self.accept_share(&share.polynomial_owner, share.owner_x_coordinate, y_coordinate)
    }

    /// The unencrypted share previously encrypted for `other_guardian`.
    pub fn key_share_for(&self, other_guardian: &str) -> Result<KeyShare, Error> {
        self.my_shares_for_others
            .get(other_guardian)
            .cloned()
            .ok_or_else(|| {
                Error::KeyCeremony(format!(
                    "trustee '{}' has no key share for '{}'; call encrypted_key_share_for first",
                    self.id, other_guardian
                ))
            })
    }

    /// Receive an unencrypted share and check it against the owner's commitments.
    pub fn receive_key_share(&mut self, share: &KeyShare) -> Result<(), Error> {
        if share.secret_share_for != self.id {
            return Err(Error::KeyCeremony(format!(
                "share for '{}' was sent to '{}'",
                share.secret_share_for, self.id
            )));
        }
        self.accept_share(
            &share.polynomial_owner,
            share.owner_x_coordinate,
            share.y_coordinate.clone(),
        )
    }

    // g^P_i(ℓ) must equal Π K_ij^(ℓ^j)
    fn accept_share(
        &mut self,
        owner: &str,
        owner_x_coordinate: u32,
        y_coordinate: ElementModQ,
    ) -> Result<(), Error> {
        let owner_keys = self
            .other_public_keys
            .get(owner)
            .ok_or_else(|| Error::UnknownGuardian(owner.to_owned()))?;
        if owner_keys.x_coordinate != owner_x_coordinate {
            return Err(Error::KeyCeremony(format!(
                "share from '{}' claims x-coordinate {}, expected {}",
                owner, owner_x_coordinate, owner_keys.x_coordinate
            )));
        }

        let expected =
            calculate_g_exp_p_at(self.x_coordinate, &owner_keys.coefficient_commitments());
        if self.group.g_pow_p(&y_coordinate) != expected {
            return Err(ValidationError::KeyShareInvalid {
                owner: owner.to_owned(),
                recipient: self.id.clone(),
            }
            .into());
        }

        debug!(trustee = %self.id, from = %owner, "accepted key share");
        self.accumulator.add(owner, y_coordinate);
        Ok(())
    }

    /// My share of the joint secret so far.
    pub fn key_share(&self) -> ElementModQ {
        self.accumulator.total()
    }

    /// Finish the ceremony. Fails if any known guardian has not delivered a valid share.
    pub fn into_decrypting_trustee(self) -> Result<DecryptingTrustee, Error> {
        for other in self.other_public_keys.keys() {
            if !self.accumulator.contains(other) {
                return Err(Error::KeyCeremony(format!(
                    "trustee '{}' is missing a key share from '{}'",
                    self.id, other
                )));
            }
        }

        let public_key = self.polynomial.public_key().key().clone();
        Ok(DecryptingTrustee::new(
            &self.id,
            self.x_coordinate,
            public_key,
            self.accumulator.finish(),
        ))
    }
}

/// Run the whole exchange among trustees held in memory.
///
/// Public keys are exchanged first. Then every trustee sends every other trustee an encrypted
/// share; a share that fails is retried in the clear. Any failure that remains is reported.
pub fn key_ceremony_exchange(
    trustees: &mut [KeyCeremonyTrustee],
) -> Result<KeyCeremonyResults, Error> {
    let mut seen = std::collections::BTreeSet::new();
    for trustee in trustees.iter() {
        if !seen.insert(trustee.id.clone()) {
            return Err(Error::DuplicateGuardian(trustee.id.clone()));
        }
    }

    info!(trustees = trustees.len(), "key ceremony: exchanging public keys");
    let public_keys: Vec<Guardian> = trustees.iter().map(|t| t.public_keys()).collect();
    let mut errors = Vec::new();
    for keys in &public_keys {
        for trustee in trustees.iter_mut().filter(|t| t.id != keys.guardian_id) {
            if let Err(e) = trustee.receive_public_keys(keys.clone()) {
                errors.push(e.to_string());
            }
        }
    }
    if !errors.is_empty() {
        return Err(Error::KeyCeremony(format!(
            "failed exchanging public keys: {}",
            errors.join("; ")
        )));
    }

    info!("key ceremony: exchanging key shares");
    let mut failures = Vec::new();
    for owner in 0..trustees.len() {
        for recipient in 0..trustees.len() {
            if owner == recipient {
                continue;
            }
            let recipient_id = trustees[recipient].id.clone();
            let result = match trustees[owner].encrypted_key_share_for(&recipient_id) {
                Ok(share) => trustees[recipient].receive_encrypted_key_share(&share),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                warn!(
                    owner = %trustees[owner].id,
                    recipient = %recipient_id,
                    error = %e,
                    "encrypted key share failed"
                );
                failures.push((owner, recipient, e));
            }
        }
    }

    // Second chance: publish the failed shares in the clear
    for (owner, recipient, first_error) in failures {
        let recipient_id = trustees[recipient].id.clone();
        let result = match trustees[owner].key_share_for(&recipient_id) {
            Ok(share) => trustees[recipient].receive_key_share(&share),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            errors.push(format!(
                "{} -> {}: {} (fallback: {})",
                trustees[owner].id, recipient_id, first_error, e
            ));
        }
    }
    if !errors.is_empty() {
        return Err(Error::KeyCeremony(format!(
            "failed exchanging key shares: {}",
            errors.join("; ")
        )));
    }

    KeyCeremonyResults::new(public_keys)
}

/// Check that a set of guardian records is usable together, returning their quorum.
///
/// Every guardian must have the same, non-zero, number of coefficient proofs.
pub fn guardians_quorum(guardians: &[Guardian]) -> Result<usize, Error> {
    let quorum = guardians
        .first()
        .map(|g| g.coefficient_proofs.len())
        .ok_or(Error::NoGuardians)?;

    for guardian in guardians {
        let found = guardian.coefficient_proofs.len();
        if found == 0 || found != quorum {
            return Err(ValidationError::WrongNumberOfCoefficients(
                guardian.guardian_id.clone(),
                quorum.max(1),
                found,
            )
            .into());
        }
    }
    Ok(quorum)
}

/// The public outcome of a key ceremony.
pub struct KeyCeremonyResults {
    guardians: Vec<Guardian>,
}

impl KeyCeremonyResults {
    /// Guardians are kept sorted by x-coordinate, which fixes the order of every hash over them.
    ///
    /// Fails if there are no guardians or their coefficient counts differ.
    pub fn new(mut guardians: Vec<Guardian>) -> Result<Self, Error> {
        guardians_quorum(&guardians)?;
        guardians.sort_by_key(|g| g.x_coordinate);
        Ok(KeyCeremonyResults { guardians })
    }

    pub fn quorum(&self) -> usize {
        self.guardians[0].coefficient_proofs.len()
    }

    pub fn guardians(&self) -> &[Guardian] {
        &self.guardians
    }

    /// `K = Π K_i0`
    pub fn joint_public_key(&self) -> ElGamalPublicKey {
        let first = self.guardians[0].public_key().key().clone();
        let product = self.guardians[1..]
            .iter()
            .fold(first, |product, g| product.mult_p(g.public_key().key()));
        ElGamalPublicKey::new(product)
    }

    /// `He = H(Hb; 0x12, K, K_10, K_11, ..., K_n(k-1))`
    pub fn extended_base_hash(&self, election_base_hash: &UInt256) -> UInt256 {
        let joint_public_key = self.joint_public_key();
        let commitments: Vec<ElementModP> = self
            .guardians
            .iter()
            .flat_map(|g| g.coefficient_commitments())
            .collect();

        hash_function(
            election_base_hash.as_bytes(),
            &[&EXTENDED_BASE_HASH_TAG, joint_public_key.key(), &commitments],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trustees(group: &GroupContext, n: u32, quorum: usize) -> Vec<KeyCeremonyTrustee> {
        (1..=n)
            .map(|x| KeyCeremonyTrustee::new(group, &format!("guardian{}", x), x, quorum))
            .collect()
    }

    #[test]
    fn key_ceremony_test() {
        let group = GroupContext::tiny();
        let mut trustees = trustees(&group, 3, 2);
        let results = key_ceremony_exchange(&mut trustees).unwrap();

        // joint key is the product of every K_i0
        let product = trustees
            .iter()
            .fold(group.one_mod_p(), |p, t| p.mult_p(t.election_public_key().key()));
        assert_eq!(results.joint_public_key().key(), &product);

        // every key share matches the public commitments
        for trustee in &trustees {
            let expected = results.guardians().iter().fold(group.one_mod_p(), |p, g| {
                p.mult_p(&calculate_g_exp_p_at(
                    trustee.x_coordinate(),
                    &g.coefficient_commitments(),
                ))
            });
            assert_eq!(group.g_pow_p(&trustee.key_share()), expected);
        }
    }

    #[test]
    fn extended_base_hash_is_canonical() {
        let group = GroupContext::tiny();
        let mut trustees = trustees(&group, 3, 2);
        let results = key_ceremony_exchange(&mut trustees).unwrap();

        let mut reversed: Vec<Guardian> = results.guardians().to_vec();
        reversed.reverse();
        let again = KeyCeremonyResults::new(reversed).unwrap();

        let base = UInt256::from_u32(7);
        assert_eq!(results.extended_base_hash(&base), again.extended_base_hash(&base));
        assert_ne!(
            results.extended_base_hash(&base),
            results.extended_base_hash(&UInt256::from_u32(8))
        );
        assert_eq!(results.guardians()[0].x_coordinate, 1);
    }

    #[test]
    fn lagrange_combination_recovers_joint_secret() {
        let group = GroupContext::tiny();
        let mut trustees = trustees(&group, 4, 3);
        let results = key_ceremony_exchange(&mut trustees).unwrap();

        let present = [1u32, 3, 4];
        let mut secret = group.zero_mod_q();
        for trustee in trustees.iter().filter(|t| present.contains(&t.x_coordinate())) {
            let others: Vec<u32> = present
                .iter()
                .cloned()
                .filter(|x| *x != trustee.x_coordinate())
                .collect();
            let w = compute_lagrange_coefficient(&group, trustee.x_coordinate(), &others);
            secret = &secret + &(&w * &trustee.key_share());
        }
        assert_eq!(&group.g_pow_p(&secret), results.joint_public_key().key());
    }

    #[test]
    fn tampered_encrypted_share_falls_back_to_plaintext() {
        let group = GroupContext::tiny();
        let mut t1 = KeyCeremonyTrustee::new(&group, "one", 1, 2);
        let mut t2 = KeyCeremonyTrustee::new(&group, "two", 2, 2);
        t1.receive_public_keys(t2.public_keys()).unwrap();
        t2.receive_public_keys(t1.public_keys()).unwrap();

        let mut share = t1.encrypted_key_share_for("two").unwrap();
        share.encrypted_coordinate.c1[0] ^= 0xff;
        assert!(t2.receive_encrypted_key_share(&share).is_err());

        let plain = t1.key_share_for("two").unwrap();
        t2.receive_key_share(&plain).unwrap();

        let share = t2.encrypted_key_share_for("one").unwrap();
        t1.receive_encrypted_key_share(&share).unwrap();

        assert!(t1.into_decrypting_trustee().is_ok());
        assert!(t2.into_decrypting_trustee().is_ok());
    }

    #[test]
    fn bad_shares_are_rejected() {
        let group = GroupContext::tiny();
        let mut t1 = KeyCeremonyTrustee::new(&group, "one", 1, 2);
        let mut t2 = KeyCeremonyTrustee::new(&group, "two", 2, 2);
        t1.receive_public_keys(t2.public_keys()).unwrap();
        t2.receive_public_keys(t1.public_keys()).unwrap();

        let mut share = t1.encrypted_key_share_for("two").unwrap();
        let mut plain = t1.key_share_for("two").unwrap();
        plain.y_coordinate = &plain.y_coordinate + &group.one_mod_q();
        match t2.receive_key_share(&plain) {
            Err(Error::Validation(ValidationError::KeyShareInvalid { owner, recipient })) => {
                assert_eq!(owner, "one");
                assert_eq!(recipient, "two");
            }
            other => panic!("unexpected result {:?}", other),
        }

        share.owner_x_coordinate = 3;
        assert!(t2.receive_encrypted_key_share(&share).is_err());

        share.secret_share_for = "three".to_owned();
        assert!(t2.receive_encrypted_key_share(&share).is_err());

        // nothing accepted from guardian one yet
        assert!(t2.into_decrypting_trustee().is_err());
    }

    #[test]
    fn bad_public_keys_are_rejected() {
        let group = GroupContext::tiny();
        let mut t1 = KeyCeremonyTrustee::new(&group, "one", 1, 2);
        let t2 = KeyCeremonyTrustee::new(&group, "two", 2, 3);
        let same_x = KeyCeremonyTrustee::new(&group, "other", 1, 2);

        assert!(t1.receive_public_keys(t1.public_keys()).is_err());
        assert!(t1.receive_public_keys(same_x.public_keys()).is_err());
        assert!(matches!(
            t1.receive_public_keys(t2.public_keys()),
            Err(Error::Validation(ValidationError::WrongNumberOfCoefficients(_, 2, 3)))
        ));

        let t3 = KeyCeremonyTrustee::new(&group, "three", 3, 2);
        let mut forged = t3.public_keys();
        forged.coefficient_proofs.swap(0, 1);
        assert!(matches!(
            t1.receive_public_keys(forged),
            Err(Error::Validation(ValidationError::SchnorrInvalid { coefficient: 0, .. }))
        ));
        assert!(t1.encrypted_key_share_for("three").is_err());
    }

    #[test]
    fn exchange_reports_failures() {
        let group = GroupContext::tiny();
        let mut trustees = vec![
            KeyCeremonyTrustee::new(&group, "one", 1, 2),
            KeyCeremonyTrustee::new(&group, "two", 2, 3),
        ];
        match key_ceremony_exchange(&mut trustees) {
            Err(Error::KeyCeremony(message)) => assert!(message.contains("public keys")),
            _ => panic!("exchange should fail"),
        }

        let mut duplicates = vec![
            KeyCeremonyTrustee::new(&group, "one", 1, 2),
            KeyCeremonyTrustee::new(&group, "one", 2, 2),
        ];
        assert!(matches!(
            key_ceremony_exchange(&mut duplicates),
            Err(Error::DuplicateGuardian(_))
        ));
    }

    #[test]
    fn malformed_guardian_records_are_rejected() {
        let group = GroupContext::tiny();
        let empty = Guardian {
            guardian_id: "empty".to_owned(),
            x_coordinate: 4,
            coefficient_proofs: vec![],
        };
        assert_eq!(
            empty.validate(),
            Err(ValidationError::WrongNumberOfCoefficients("empty".to_owned(), 1, 0))
        );
        assert!(matches!(
            KeyCeremonyResults::new(vec![empty.clone()]),
            Err(Error::Validation(ValidationError::WrongNumberOfCoefficients(_, 1, 0)))
        ));
        assert!(matches!(KeyCeremonyResults::new(vec![]), Err(Error::NoGuardians)));

        let one = KeyCeremonyTrustee::new(&group, "one", 1, 2).public_keys();
        let two = KeyCeremonyTrustee::new(&group, "two", 2, 3).public_keys();
        assert!(matches!(
            KeyCeremonyResults::new(vec![one.clone(), two]),
            Err(Error::Validation(ValidationError::WrongNumberOfCoefficients(_, 2, 3)))
        ));
        assert!(matches!(
            KeyCeremonyResults::new(vec![one.clone(), empty]),
            Err(Error::Validation(ValidationError::WrongNumberOfCoefficients(_, 2, 0)))
        ));

        let results = KeyCeremonyResults::new(vec![one]).unwrap();
        assert_eq!(results.quorum(), 2);
    }

    #[test]
    fn accumulator_sums_shares() {
        let group = GroupContext::tiny();
        let mut accumulator = KeyShareAccumulator::new(group.u32_to_element_mod_q(5));
        accumulator.add("a", group.u32_to_element_mod_q(7));
        accumulator.add("b", group.u32_to_element_mod_q(11));
        accumulator.add("a", group.u32_to_element_mod_q(1));
        assert!(accumulator.contains("b"));
        assert_eq!(accumulator.finish(), group.u32_to_element_mod_q(17));
    }

    #[test]
    #[should_panic(expected = "x-coordinate cannot be zero")]
    fn zero_x_coordinate_panics() {
        let group = GroupContext::tiny();
        KeyCeremonyTrustee::new(&group, "zero", 0, 2);
    }
}
