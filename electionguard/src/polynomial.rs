use crate::*;

/// A guardian's secret polynomial of degree `quorum - 1` over Q.
///
/// `coefficients[0]` is the guardian's secret key. Only the commitments `g^a_j` and their
/// Schnorr proofs are ever published.
pub struct ElectionPolynomial {
    pub guardian_id: String,
    pub x_coordinate: u32,
    coefficients: Vec<ElementModQ>,
    pub coefficient_commitments: Vec<ElementModP>,
    pub coefficient_proofs: Vec<SchnorrProof>,
}

impl ElectionPolynomial {
    /// Generate a random polynomial with `quorum` coefficients.
    pub fn generate(
        group: &GroupContext,
        guardian_id: &str,
        x_coordinate: u32,
        quorum: usize,
    ) -> Self {
        let coefficients = (0..quorum).map(|_| group.random_element_mod_q(2)).collect();
        ElectionPolynomial::from_coefficients(guardian_id, x_coordinate, coefficients)
    }

    /// Build a polynomial from known coefficients, committing to and proving each one.
    ///
    /// # Panics
    ///
    /// Panics if there are no coefficients, or if any coefficient is 0 or 1.
    pub fn from_coefficients(
        guardian_id: &str,
        x_coordinate: u32,
        coefficients: Vec<ElementModQ>,
    ) -> Self {
        assert!(!coefficients.is_empty(), "polynomial needs at least one coefficient");

        let mut coefficient_commitments = Vec::with_capacity(coefficients.len());
        let mut coefficient_proofs = Vec::with_capacity(coefficients.len());
        for (index, coefficient) in coefficients.iter().enumerate() {
            let group = coefficient.group();
            let keypair = ElGamalKeypair::from_secret(coefficient.clone());
            let nonce = group.random_element_mod_q(0);
            let proof = SchnorrProof::new(&keypair, x_coordinate, index as u32, &nonce);

            coefficient_commitments.push(keypair.public_key.key().clone());
            coefficient_proofs.push(proof);
        }

        ElectionPolynomial {
            guardian_id: guardian_id.to_owned(),
            x_coordinate,
            coefficients,
            coefficient_commitments,
            coefficient_proofs,
        }
    }

    pub fn quorum(&self) -> usize {
        self.coefficients.len()
    }

    pub(crate) fn secret_key(&self) -> ElGamalSecretKey {
        ElGamalSecretKey::new(self.coefficients[0].clone())
    }

    pub fn public_key(&self) -> ElGamalPublicKey {
        ElGamalPublicKey::new(self.coefficient_commitments[0].clone())
    }

    /// `P(x) = Σ a_j x^j mod Q`
    pub fn value_at(&self, x: u32) -> ElementModQ {
        let group = self.coefficients[0].group();
        let x = group.u32_to_element_mod_q(x);

        let mut result = group.zero_mod_q();
        let mut x_power = group.one_mod_q();
        for coefficient in &self.coefficients {
            result = &result + &(coefficient * &x_power);
            x_power = &x_power * &x;
        }
        result
    }
}

/// `g^P(x)` computed from the commitments alone: `Π K_j^(x^j)`.
pub fn calculate_g_exp_p_at(x: u32, commitments: &[ElementModP]) -> ElementModP {
    assert!(!commitments.is_empty(), "no commitments");
    let group = commitments[0].group();
    let x = group.u32_to_element_mod_q(x);

    let mut result = group.one_mod_p();
    let mut x_power = group.one_mod_q();
    for commitment in commitments {
        result = result.mult_p(&commitment.pow_p(&x_power));
        x_power = &x_power * &x;
    }
    result
}
