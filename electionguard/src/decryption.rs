use crate::*;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{debug, warn};

/// Domain separation tag for decryption proofs.
const DECRYPTION_TAG: u8 = 0x30;

/// A guardian after the key ceremony, holding its share `P(i)` of the joint secret.
pub struct DecryptingTrustee {
    id: String,
    x_coordinate: u32,
    election_public_key: ElementModP,
    key_share: ElementModQ,
}

impl DecryptingTrustee {
    pub fn new(
        id: &str,
        x_coordinate: u32,
        election_public_key: ElementModP,
        key_share: ElementModQ,
    ) -> Self {
        DecryptingTrustee {
            id: id.to_owned(),
            x_coordinate,
            election_public_key,
            key_share,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn x_coordinate(&self) -> u32 {
        self.x_coordinate
    }

    /// This guardian's `K_i0`.
    pub fn election_public_key(&self) -> &ElementModP {
        &self.election_public_key
    }

    /// Compute `M_i = α^P(i)` along with the commitments of a proof of correct decryption.
    ///
    /// The returned nonce must be handed back to `respond` exactly once.
    pub fn partial_decrypt(&self, pad: &ElementModP) -> (PartialDecryption, DecryptionNonce) {
        let group = pad.group();
        let u = group.random_element_mod_q(0);

        let partial = PartialDecryption {
            guardian_id: self.id.clone(),
            mi: pad.pow_p(&self.key_share),
            a: group.g_pow_p(&u),
            b: pad.pow_p(&u),
        };
        let nonce = DecryptionNonce {
            guardian_id: self.id.clone(),
            u,
        };
        (partial, nonce)
    }

    /// Answer the challenge for an earlier partial decryption: `v_i = u_i - c_i P(i)`.
    pub fn respond(
        &self,
        nonce: DecryptionNonce,
        challenge: &ElementModQ,
    ) -> Result<ElementModQ, Error> {
        if nonce.guardian_id != self.id {
            return Err(Error::UnknownGuardian(nonce.guardian_id));
        }
        Ok(&nonce.u - &(challenge * &self.key_share))
    }
}

/// The secret nonce behind a partial decryption's commitments.
///
/// Deliberately neither `Clone` nor `Serialize`: it is consumed by `DecryptingTrustee::respond`.
pub struct DecryptionNonce {
    guardian_id: String,
    u: ElementModQ,
}

impl fmt::Debug for DecryptionNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecryptionNonce({})", self.guardian_id)
    }
}

/// One guardian's contribution to a decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialDecryption {
    pub guardian_id: String,
    /// `M_i = α^P(i)`
    pub mi: ElementModP,
    /// `a_i = g^u_i`
    pub a: ElementModP,
    /// `b_i = α^u_i`
    pub b: ElementModP,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LagrangeCoordinate {
    pub guardian_id: String,
    pub x_coordinate: u32,
    pub lagrange_coefficient: ElementModQ,
}

/// `w_i = Π x_j / (x_j - x_i) mod Q` over the other present guardians' x-coordinates.
pub fn compute_lagrange_coefficient(
    group: &GroupContext,
    x_coordinate: u32,
    others: &[u32],
) -> ElementModQ {
    let x = group.u32_to_element_mod_q(x_coordinate);
    let mut numerator = group.one_mod_q();
    let mut denominator = group.one_mod_q();
    for other in others {
        let xj = group.u32_to_element_mod_q(*other);
        denominator = &denominator * &(&xj - &x);
        numerator = &numerator * &xj;
    }
    numerator.div_q(&denominator)
}

/// A decrypted value with a proof that it was decrypted correctly under the joint key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecryptedValue {
    /// None when `g^t` is beyond the group's discrete log bound
    pub value: Option<u32>,
    /// `M = α^s` for the joint secret `s`
    pub m: ElementModP,
    pub proof: ChaumPedersenProof,
    pub partial_decryptions: Vec<PartialDecryption>,
    pub lagrange_coordinates: Vec<LagrangeCoordinate>,
}

impl DecryptedValue {
    /// Check the combined proof against the ciphertext, joint key, and extended base hash.
    pub fn verify(
        &self,
        ciphertext: &ElGamalCiphertext,
        joint_public_key: &ElGamalPublicKey,
        extended_base_hash: &UInt256,
    ) -> Result<(), ValidationError> {
        if !self.m.is_valid_residue() {
            return Err(ValidationError::InvalidResidue("decryption share product"));
        }

        let group = self.m.group();
        let (a, b) = self.proof.commitments(
            &group.g_mod_p(),
            joint_public_key.key(),
            &ciphertext.pad,
            &self.m,
        );
        let challenge = decryption_challenge(
            extended_base_hash,
            joint_public_key,
            ciphertext,
            &a,
            &b,
            &self.m,
        );
        if challenge != self.proof.c {
            return Err(ValidationError::DecryptionProofInvalid);
        }

        if let Some(value) = self.value {
            let g_pow_t = group.g_pow_p(&group.u32_to_element_mod_q(value));
            if g_pow_t.mult_p(&self.m) != ciphertext.data {
                return Err(ValidationError::DecryptionProofInvalid);
            }
        }
        Ok(())
    }
}

// c = H(He; 0x30, K, α, β, a, b, M)
fn decryption_challenge(
    extended_base_hash: &UInt256,
    joint_public_key: &ElGamalPublicKey,
    ciphertext: &ElGamalCiphertext,
    a: &ElementModP,
    b: &ElementModP,
    m: &ElementModP,
) -> ElementModQ {
    hash_function(
        extended_base_hash.as_bytes(),
        &[
            &DECRYPTION_TAG,
            joint_public_key.key(),
            &ciphertext.pad,
            &ciphertext.data,
            a,
            b,
            m,
        ],
    )
    .to_element_mod_q(m.group())
}

/// Runs threshold decryption among the available guardians.
pub struct Decryptor {
    group: GroupContext,
    extended_base_hash: UInt256,
    joint_public_key: ElGamalPublicKey,
    quorum: usize,

    // Guardian id to (x-coordinate, g^P(x))
    key_share_commitments: BTreeMap<String, (u32, ElementModP)>,
}

impl Decryptor {
    /// Fails if the guardian records are malformed, or if `quorum` is not the number of
    /// coefficients each guardian committed to.
    pub fn new(
        group: &GroupContext,
        extended_base_hash: UInt256,
        joint_public_key: ElGamalPublicKey,
        guardians: &[Guardian],
        quorum: usize,
    ) -> Result<Self, Error> {
        let coefficients = guardians_quorum(guardians)?;
        if quorum != coefficients {
            return Err(Error::QuorumMismatch {
                quorum,
                coefficients,
            });
        }

        let commitments: Vec<Vec<ElementModP>> =
            guardians.iter().map(|g| g.coefficient_commitments()).collect();

        // g^P(x_i) = Π_j g^P_j(x_i)
        let key_share_commitments = guardians
            .iter()
            .map(|guardian| {
                let public = commitments.iter().fold(group.one_mod_p(), |product, c| {
                    product.mult_p(&calculate_g_exp_p_at(guardian.x_coordinate, c))
                });
                (guardian.guardian_id.clone(), (guardian.x_coordinate, public))
            })
            .collect();

        Ok(Decryptor {
            group: group.clone(),
            extended_base_hash,
            joint_public_key,
            quorum,
            key_share_commitments,
        })
    }

    /// Decrypt with whichever guardians are present. Any quorum gives the same value.
    pub fn decrypt(
        &self,
        ciphertext: &ElGamalCiphertext,
        trustees: &[&DecryptingTrustee],
    ) -> Result<DecryptedValue, Error> {
        let mut seen = BTreeSet::new();
        for trustee in trustees {
            if !seen.insert(trustee.id()) {
                return Err(Error::DuplicateGuardian(trustee.id().to_owned()));
            }
            match self.key_share_commitments.get(trustee.id()) {
                Some((x, _)) if *x == trustee.x_coordinate() => {}
                _ => return Err(Error::UnknownGuardian(trustee.id().to_owned())),
            }
        }
        if trustees.len() < self.quorum {
            return Err(Error::QuorumNotMet {
                needed: self.quorum,
                available: trustees.len(),
            });
        }

        let present: Vec<u32> = trustees.iter().map(|t| t.x_coordinate()).collect();
        let lagrange_coordinates: Vec<LagrangeCoordinate> = trustees
            .iter()
            .map(|trustee| {
                let others: Vec<u32> = present
                    .iter()
                    .cloned()
                    .filter(|x| *x != trustee.x_coordinate())
                    .collect();
                LagrangeCoordinate {
                    guardian_id: trustee.id().to_owned(),
                    x_coordinate: trustee.x_coordinate(),
                    lagrange_coefficient: compute_lagrange_coefficient(
                        &self.group,
                        trustee.x_coordinate(),
                        &others,
                    ),
                }
            })
            .collect();

        debug!(guardians = trustees.len(), "collecting partial decryptions");
        let (partials, nonces): (Vec<PartialDecryption>, Vec<DecryptionNonce>) = trustees
            .par_iter()
            .map(|trustee| trustee.partial_decrypt(&ciphertext.pad))
            .unzip();

        // M = Π M_i^w_i
        let m = partials
            .iter()
            .zip(&lagrange_coordinates)
            .fold(self.group.one_mod_p(), |product, (partial, coordinate)| {
                product.mult_p(&partial.mi.pow_p(&coordinate.lagrange_coefficient))
            });
        let value = self.group.dlog_g(&ciphertext.data.div_p(&m));

        // collective challenge, split among guardians by their Lagrange coefficients
        let a = partials.iter().fold(self.group.one_mod_p(), |p, partial| p.mult_p(&partial.a));
        let b = partials.iter().fold(self.group.one_mod_p(), |p, partial| p.mult_p(&partial.b));
        let c = decryption_challenge(
            &self.extended_base_hash,
            &self.joint_public_key,
            ciphertext,
            &a,
            &b,
            &m,
        );

        let responses: Vec<ElementModQ> = trustees
            .par_iter()
            .zip(nonces)
            .zip(&lagrange_coordinates)
            .map(|((trustee, nonce), coordinate)| {
                trustee.respond(nonce, &(&coordinate.lagrange_coefficient * &c))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        for ((partial, coordinate), v) in partials
            .iter()
            .zip(&lagrange_coordinates)
            .zip(&responses)
        {
            self.check_partial(ciphertext, partial, &(&coordinate.lagrange_coefficient * &c), v)?;
        }

        let v = responses.iter().fold(self.group.zero_mod_q(), |sum, v| &sum + v);
        let decrypted = DecryptedValue {
            value,
            m,
            proof: ChaumPedersenProof::new(c, v),
            partial_decryptions: partials,
            lagrange_coordinates,
        };
        decrypted.verify(ciphertext, &self.joint_public_key, &self.extended_base_hash)?;
        Ok(decrypted)
    }

    // a_i == g^v_i (g^P(i))^c_i and b_i == α^v_i M_i^c_i
    fn check_partial(
        &self,
        ciphertext: &ElGamalCiphertext,
        partial: &PartialDecryption,
        challenge: &ElementModQ,
        response: &ElementModQ,
    ) -> Result<(), ValidationError> {
        let invalid = || ValidationError::PartialDecryptionInvalid(partial.guardian_id.clone());
        let (_, public) = self
            .key_share_commitments
            .get(&partial.guardian_id)
            .ok_or_else(invalid)?;
        if !partial.mi.is_valid_residue() {
            warn!(guardian = %partial.guardian_id, "partial decryption is not a valid residue");
            return Err(invalid());
        }

        let proof = ChaumPedersenProof::new(challenge.clone(), response.clone());
        let (a, b) = proof.commitments(&self.group.g_mod_p(), public, &ciphertext.pad, &partial.mi);
        if a != partial.a || b != partial.b {
            warn!(guardian = %partial.guardian_id, "partial decryption failed to verify");
            return Err(invalid());
        }
        Ok(())
    }
}
