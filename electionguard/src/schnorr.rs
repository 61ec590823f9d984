use crate::*;

/// Domain separation tag for Schnorr challenges.
const SCHNORR_TAG: u8 = 0x10;

/// Proof of knowledge of the secret `s` behind a public key `K = g^s`.
///
/// The challenge is bound to the guardian's x-coordinate and the coefficient index, so a proof
/// made for one coefficient can't be replayed for another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchnorrProof {
    pub public_key: ElementModP,
    pub challenge: ElementModQ,
    pub response: ElementModQ,
}

impl SchnorrProof {
    /// Prove knowledge of `keypair`'s secret. `nonce` must be random and never reused.
    pub fn new(
        keypair: &ElGamalKeypair,
        guardian_x_coordinate: u32,
        coefficient_index: u32,
        nonce: &ElementModQ,
    ) -> Self {
        let group = keypair.group();
        let public_key = keypair.public_key.key().clone();
        let commitment = group.g_pow_p(nonce);
        let challenge = schnorr_challenge(
            group,
            guardian_x_coordinate,
            coefficient_index,
            &public_key,
            &commitment,
        );
        let response = nonce - &(&challenge * keypair.secret_key.key());

        SchnorrProof {
            public_key,
            challenge,
            response,
        }
    }

    /// Check the proof for the given guardian and coefficient.
    pub fn validate(
        &self,
        guardian_x_coordinate: u32,
        coefficient_index: u32,
    ) -> Result<(), ValidationError> {
        if !self.public_key.is_valid_residue() {
            return Err(ValidationError::InvalidResidue("schnorr public key"));
        }

        let group = self.public_key.group();
        // h = g^v * K^c
        let commitment = group
            .g_pow_p(&self.response)
            .mult_p(&self.public_key.pow_p(&self.challenge));
        let expected = schnorr_challenge(
            group,
            guardian_x_coordinate,
            coefficient_index,
            &self.public_key,
            &commitment,
        );

        if expected != self.challenge {
            return Err(ValidationError::ChallengeMismatch("schnorr"));
        }
        Ok(())
    }
}

// c = H(Hp; 0x10, i, j, K, h)
fn schnorr_challenge(
    group: &GroupContext,
    guardian_x_coordinate: u32,
    coefficient_index: u32,
    public_key: &ElementModP,
    commitment: &ElementModP,
) -> ElementModQ {
    hash_function(
        group.parameter_base_hash().as_bytes(),
        &[
            &SCHNORR_TAG,
            &guardian_x_coordinate,
            &coefficient_index,
            public_key,
            commitment,
        ],
    )
    .to_element_mod_q(group)
}
