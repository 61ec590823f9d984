//! Chaum-Pedersen proofs.
//!
//! `ChaumPedersenProof` is a single `(c, v)` pair proving two discrete logs are equal. The range
//! proof strings `limit + 1` of them together into a disjunction: the ciphertext encrypts one of
//! `0..=limit`, without saying which. The position of each pair in the list is the plaintext
//! value it stands for.

use crate::*;

/// Domain separation tag for range proof challenges.
const RANGE_PROOF_TAG: u8 = 0x21;

/// One `(challenge, response)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChaumPedersenProof {
    pub c: ElementModQ,
    pub v: ElementModQ,
}

impl ChaumPedersenProof {
    pub fn new(c: ElementModQ, v: ElementModQ) -> Self {
        ChaumPedersenProof { c, v }
    }

    /// Recompute the prover's commitments for a claim that `log_g(gx) == log_h(hx)`.
    ///
    /// Returns `(g^v * gx^c, h^v * hx^c)`.
    pub fn commitments(
        &self,
        g: &ElementModP,
        gx: &ElementModP,
        h: &ElementModP,
        hx: &ElementModP,
    ) -> (ElementModP, ElementModP) {
        let a = g.pow_p(&self.v).mult_p(&gx.pow_p(&self.c));
        let b = h.pow_p(&self.v).mult_p(&hx.pow_p(&self.c));
        (a, b)
    }
}

/// Proof that a ciphertext encrypts an integer in `[0, limit]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChaumPedersenRangeProof {
    pub proofs: Vec<ChaumPedersenProof>,
}

impl ChaumPedersenRangeProof {
    /// Prove that `ciphertext`, made with `nonce` under `public_key`, encrypts `vote`.
    ///
    /// The proof is bound to `extended_base_hash`, so it only validates for that election.
    ///
    /// # Panics
    ///
    /// Panics if `vote > limit`.
    pub fn new(
        ciphertext: &ElGamalCiphertext,
        vote: u32,
        limit: u32,
        nonce: &ElementModQ,
        public_key: &ElGamalPublicKey,
        extended_base_hash: &UInt256,
    ) -> Self {
        assert!(vote <= limit, "vote {} is outside of [0, {}]", vote, limit);
        build_range_proof(ciphertext, vote, limit, nonce, public_key, extended_base_hash)
    }

    /// Build a proof without checking that `vote <= limit`. Produces invalid proofs on purpose.
    #[cfg(test)]
    pub(crate) fn new_unchecked(
        ciphertext: &ElGamalCiphertext,
        vote: u32,
        limit: u32,
        nonce: &ElementModQ,
        public_key: &ElGamalPublicKey,
        extended_base_hash: &UInt256,
    ) -> Self {
        build_range_proof(ciphertext, vote, limit, nonce, public_key, extended_base_hash)
    }

    /// Verify the proof against a ciphertext, a public key and an election's extended base hash.
    pub fn validate(
        &self,
        ciphertext: &ElGamalCiphertext,
        public_key: &ElGamalPublicKey,
        extended_base_hash: &UInt256,
        limit: u32,
    ) -> Result<(), ValidationError> {
        let expected = limit as usize + 1;
        if self.proofs.len() != expected {
            return Err(ValidationError::WrongLimit {
                expected,
                found: self.proofs.len(),
            });
        }

        if !ciphertext.pad.is_valid_residue() {
            return Err(ValidationError::InvalidResidue("ciphertext pad"));
        }
        if !ciphertext.data.is_valid_residue() {
            return Err(ValidationError::InvalidResidue("ciphertext data"));
        }
        if !public_key.key().is_valid_residue() {
            return Err(ValidationError::InvalidResidue("public key"));
        }

        let group = public_key.group();
        let g = group.g_mod_p();
        let mut commitments = Vec::with_capacity(2 * expected);
        let mut challenge_sum = group.zero_mod_q();
        for (j, proof) in self.proofs.iter().enumerate() {
            // β / g^j
            let shifted = ciphertext
                .data
                .mult_p(&group.g_inv_pow_p(&group.u32_to_element_mod_q(j as u32)));
            let (a, b) = proof.commitments(&g, &ciphertext.pad, public_key.key(), &shifted);
            commitments.push(a);
            commitments.push(b);
            challenge_sum = &challenge_sum + &proof.c;
        }

        let c = range_challenge(extended_base_hash, public_key, ciphertext, &commitments);
        if challenge_sum != c {
            return Err(ValidationError::ChallengeMismatch("range proof"));
        }

        Ok(())
    }
}

// c = H(He; 0x21, K, α, β, a0, b0, a1, b1, ...)
fn range_challenge(
    extended_base_hash: &UInt256,
    public_key: &ElGamalPublicKey,
    ciphertext: &ElGamalCiphertext,
    commitments: &[ElementModP],
) -> ElementModQ {
    hash_function(
        extended_base_hash.as_bytes(),
        &[
            &RANGE_PROOF_TAG,
            public_key.key(),
            &ciphertext.pad,
            &ciphertext.data,
            &commitments,
        ],
    )
    .to_element_mod_q(public_key.group())
}

fn build_range_proof(
    ciphertext: &ElGamalCiphertext,
    vote: u32,
    limit: u32,
    nonce: &ElementModQ,
    public_key: &ElGamalPublicKey,
    extended_base_hash: &UInt256,
) -> ChaumPedersenRangeProof {
    let group = public_key.group();
    let size = limit as usize + 1;
    let randoms = Nonces::new(nonce, &[&"range-chaum-pedersen-proof"]).take(size);
    let challenges = Nonces::new(nonce, &[&"range-chaum-pedersen-proof-constants"]).take(size);
    let vote_q = group.u32_to_element_mod_q(vote);

    // a_j = g^u_j
    // b_j = K^u_j                       for the real vote
    // b_j = K^u_j * g^((ℓ - j) * c_j)   for every other value
    let mut commitments = Vec::with_capacity(2 * size);
    for (j, u) in randoms.iter().enumerate() {
        let a = group.g_pow_p(u);
        let k_u = public_key.key().pow_p(u);
        let b = if j as u32 == vote {
            k_u
        } else {
            let offset = &vote_q - &group.u32_to_element_mod_q(j as u32);
            k_u.mult_p(&group.g_pow_p(&(&offset * &challenges[j])))
        };
        commitments.push(a);
        commitments.push(b);
    }

    let c = range_challenge(extended_base_hash, public_key, ciphertext, &commitments);

    // The real challenge absorbs whatever the simulated ones leave over
    let mut simulated_sum = group.zero_mod_q();
    for (j, c_j) in challenges.iter().enumerate() {
        if j as u32 != vote {
            simulated_sum = &simulated_sum + c_j;
        }
    }
    let real_challenge = &c - &simulated_sum;

    let proofs = randoms
        .iter()
        .zip(challenges.iter())
        .enumerate()
        .map(|(j, (u, c_j))| {
            let c_j = if j as u32 == vote {
                real_challenge.clone()
            } else {
                c_j.clone()
            };
            let v = u - &(&c_j * nonce);
            ChaumPedersenProof::new(c_j, v)
        })
        .collect();

    ChaumPedersenRangeProof { proofs }
}
