use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("electionguard: quorum not met: need {needed} guardians, found {available}")]
    QuorumNotMet { needed: usize, available: usize },

    #[error("electionguard: key ceremony failed: {0}")]
    KeyCeremony(String),

    #[error("electionguard: no guardians given")]
    NoGuardians,

    #[error("electionguard: quorum {quorum} doesn't match the guardians' {coefficients} coefficients")]
    QuorumMismatch { quorum: usize, coefficients: usize },

    #[error("electionguard: unknown guardian {0}")]
    UnknownGuardian(String),

    #[error("electionguard: duplicate guardian {0}")]
    DuplicateGuardian(String),

    #[error("electionguard: invalid hexidecimal: {0}")]
    BadHex(#[from] hex::FromHexError),

    #[error("electionguard: value out of range for {0}")]
    OutOfRange(&'static str),

    #[error("electionguard: config error: {0}")]
    Config(String),

    #[error("electionguard: {0}")]
    Validation(#[from] ValidationError),
}

/// Proof validation errors
///
/// Each variant says why a proof was rejected, so a caller can tell a fraudulent proof apart
/// from one built against the wrong election.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("electionguard validation: range proof has {found} entries, expected {expected} (wrong limit or malformed proof)")]
    WrongLimit { expected: usize, found: usize },

    #[error("electionguard validation: {0} is not a valid residue")]
    InvalidResidue(&'static str),

    #[error("electionguard validation: {0} challenge does not match the transcript")]
    ChallengeMismatch(&'static str),

    #[error("electionguard validation: guardian {guardian} has invalid schnorr proof for coefficient {coefficient}")]
    SchnorrInvalid { guardian: String, coefficient: usize },

    #[error("electionguard validation: guardian {0} needs {1} coefficient proofs, found {2}")]
    WrongNumberOfCoefficients(String, usize, usize),

    #[error("electionguard validation: key share from {owner} for {recipient} does not match the commitments")]
    KeyShareInvalid { owner: String, recipient: String },

    #[error("electionguard validation: partial decryption from guardian {0} failed to verify")]
    PartialDecryptionInvalid(String),

    #[error("electionguard validation: decryption proof failed to verify")]
    DecryptionProofInvalid,
}
