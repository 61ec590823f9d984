use super::*;

struct Ballot {
    selections: Vec<ElGamalCiphertext>,
    proofs: Vec<ChaumPedersenRangeProof>,
    contest_proof: ChaumPedersenRangeProof,
}

// One contest: a yes/no selection per candidate, at most `contest_limit` yeses.
fn cast_ballot(
    votes: &[u32],
    contest_limit: u32,
    seed: &ElementModQ,
    public_key: &ElGamalPublicKey,
    extended_base_hash: &UInt256,
) -> Ballot {
    let nonces = Nonces::new(seed, &[&"contest", &0u32]);

    let mut selections = Vec::new();
    let mut proofs = Vec::new();
    for (i, vote) in votes.iter().enumerate() {
        let nonce = nonces.get(i as u32);
        let ciphertext = elgamal_encrypt(*vote, &nonce, public_key);
        proofs.push(ChaumPedersenRangeProof::new(
            &ciphertext,
            *vote,
            1,
            &nonce,
            public_key,
            extended_base_hash,
        ));
        selections.push(ciphertext);
    }

    // the contest total is encrypted under the sum of the selection nonces
    let contest = encrypted_sum(&selections).unwrap();
    let nonce_sum = nonces
        .take(votes.len())
        .iter()
        .fold(seed.group().zero_mod_q(), |sum, n| &sum + n);
    let contest_proof = ChaumPedersenRangeProof::new(
        &contest,
        votes.iter().sum(),
        contest_limit,
        &nonce_sum,
        public_key,
        extended_base_hash,
    );

    Ballot {
        selections,
        proofs,
        contest_proof,
    }
}

fn validate_ballot(
    ballot: &Ballot,
    contest_limit: u32,
    public_key: &ElGamalPublicKey,
    extended_base_hash: &UInt256,
) -> Result<(), ValidationError> {
    for (ciphertext, proof) in ballot.selections.iter().zip(&ballot.proofs) {
        proof.validate(ciphertext, public_key, extended_base_hash, 1)?;
    }
    let contest = encrypted_sum(&ballot.selections).unwrap();
    ballot
        .contest_proof
        .validate(&contest, public_key, extended_base_hash, contest_limit)
}

#[test]
fn end_to_end_election() {
    let group = GroupContext::tiny();
    let election_base_hash = UInt256::from_u32(2024);

    // Create 3 guardians, any 2 of whom can decrypt
    let mut ceremony = vec![
        KeyCeremonyTrustee::new(&group, "alice", 1, 2),
        KeyCeremonyTrustee::new(&group, "bob", 2, 2),
        KeyCeremonyTrustee::new(&group, "carol", 3, 2),
    ];
    let results = key_ceremony_exchange(&mut ceremony).unwrap();
    for guardian in results.guardians() {
        guardian.validate().unwrap();
    }

    let public_key = results.joint_public_key().accelerate();
    let extended_base_hash = results.extended_base_hash(&election_base_hash);

    // Cast some ballots, three candidates, vote for at most two
    let votes: Vec<Vec<u32>> = vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 0]];
    let ballots: Vec<Ballot> = votes
        .iter()
        .map(|v| {
            let seed = group.random_element_mod_q(0);
            cast_ballot(v, 2, &seed, &public_key, &extended_base_hash)
        })
        .collect();

    for ballot in &ballots {
        validate_ballot(ballot, 2, &public_key, &extended_base_hash).unwrap();
    }

    // A ballot bound to another election is rejected
    let elsewhere = results.extended_base_hash(&UInt256::from_u32(1));
    assert!(validate_ballot(&ballots[0], 2, &public_key, &elsewhere).is_err());

    // Voting is over
    // ----------------

    // Tally each candidate homomorphically
    let tallies: Vec<ElGamalCiphertext> = (0..3)
        .map(|candidate| encrypted_sum(ballots.iter().map(|b| &b.selections[candidate])).unwrap())
        .collect();

    let mut trustees: Vec<DecryptingTrustee> = ceremony
        .into_iter()
        .map(|t| t.into_decrypting_trustee().unwrap())
        .collect();

    // Carol doesn't show up
    trustees.pop();
    let present: Vec<&DecryptingTrustee> = trustees.iter().collect();

    let decryptor = Decryptor::new(
        &group,
        extended_base_hash,
        public_key.clone(),
        results.guardians(),
        2,
    )
    .unwrap();
    let mut totals = Vec::new();
    for tally in &tallies {
        let decrypted = decryptor.decrypt(tally, &present).unwrap();
        decrypted.verify(tally, &public_key, &extended_base_hash).unwrap();
        totals.push(decrypted.value.unwrap());
    }
    assert_eq!(totals, vec![2, 2, 1]);

    // One guardian alone can't decrypt
    assert!(matches!(
        decryptor.decrypt(&tallies[0], &present[..1]),
        Err(Error::QuorumNotMet { needed: 2, available: 1 })
    ));
}

#[test]
fn overvote_is_detected() {
    let group = GroupContext::tiny();
    let keypair = ElGamalKeypair::from_seed(&group, b"overvote");
    let extended_base_hash = UInt256::from_u32(3);

    // Each selection is fine, but the contest allows only one
    let seed = group.random_element_mod_q(0);
    let ballot = cast_ballot(&[1, 1], 2, &seed, &keypair.public_key, &extended_base_hash);
    assert!(validate_ballot(&ballot, 2, &keypair.public_key, &extended_base_hash).is_ok());
    assert_eq!(
        validate_ballot(&ballot, 1, &keypair.public_key, &extended_base_hash),
        Err(ValidationError::WrongLimit { expected: 2, found: 3 })
    );
}

#[test]
fn production_group_election() {
    let config = Config {
        parameters: ParameterSet::Production3072,
        ..Config::default()
    };
    let group = config.group_context();

    let mut ceremony = vec![
        KeyCeremonyTrustee::new(&group, "one", 1, 2),
        KeyCeremonyTrustee::new(&group, "two", 2, 2),
    ];
    let results = key_ceremony_exchange(&mut ceremony).unwrap();
    let public_key = results.joint_public_key();
    let extended_base_hash = results.extended_base_hash(&UInt256::from_u32(9));

    let seed = group.random_element_mod_q(0);
    let ballot = cast_ballot(&[0, 1], 1, &seed, &public_key, &extended_base_hash);
    validate_ballot(&ballot, 1, &public_key, &extended_base_hash).unwrap();

    let trustees: Vec<DecryptingTrustee> = ceremony
        .into_iter()
        .map(|t| t.into_decrypting_trustee().unwrap())
        .collect();
    let present: Vec<&DecryptingTrustee> = trustees.iter().collect();
    let decryptor = Decryptor::new(
        &group,
        extended_base_hash,
        public_key.clone(),
        results.guardians(),
        results.quorum(),
    )
    .unwrap();

    let decrypted = decryptor.decrypt(&ballot.selections[1], &present).unwrap();
    assert_eq!(decrypted.value, Some(1));
    decrypted
        .verify(&ballot.selections[1], &public_key, &extended_base_hash)
        .unwrap();

    // the record serializes as hex
    let json = serde_json::to_value(&decrypted).unwrap();
    assert_eq!(json["m"].as_str().unwrap().len(), 2 * group.p_bytes());
}
