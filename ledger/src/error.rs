use scrutin_types::{Address, CandidateId, ElectionId, VoteId};
use thiserror::Error;

/// Failures surfaced by the vote ledger.
///
/// Every failing validation leaves all stored data unchanged: either the
/// full cast/challenge transition commits, or nothing does.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger dependencies are not configured")]
    ConfigurationMissing,

    #[error("election {0} is not active")]
    ElectionNotActive(ElectionId),

    #[error("voter {voter} is not eligible for election {election}")]
    VoterIneligible { election: ElectionId, voter: Address },

    #[error("voter {voter} has already voted in election {election}")]
    AlreadyVoted { election: ElectionId, voter: Address },

    #[error("encrypted ballot is invalid")]
    InvalidBallot,

    #[error("ballot proof is invalid")]
    InvalidProof,

    #[error("token burn failed for voter {voter} in election {election}")]
    TokenBurnFailed { election: ElectionId, voter: Address },

    #[error("vote {0} not found or no longer valid")]
    VoteNotFound(VoteId),

    #[error("vote {vote_id} was not cast for candidate {expected}")]
    WrongCandidate {
        vote_id: VoteId,
        expected: CandidateId,
    },
}

impl LedgerError {
    /// Stable numeric code for this failure, a contract with callers.
    ///
    /// Code 205 is reserved (the historical generic cast failure no code
    /// path produces); the enumeration keeps the gap rather than
    /// renumbering.
    pub const fn code(&self) -> u16 {
        match self {
            LedgerError::ConfigurationMissing => 200,
            LedgerError::VoterIneligible { .. } => 201,
            LedgerError::ElectionNotActive(_) => 202,
            LedgerError::AlreadyVoted { .. } => 203,
            LedgerError::InvalidBallot => 204,
            LedgerError::InvalidProof => 206,
            LedgerError::VoteNotFound(_) => 207,
            LedgerError::WrongCandidate { .. } => 208,
            LedgerError::TokenBurnFailed { .. } => 209,
        }
    }
}
