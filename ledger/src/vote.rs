//! Vote records and attestation projections.

use scrutin_types::{Address, CandidateId, ElectionId, EncryptedBallot, Height, ProofHash, VoteId};
use serde::{Deserialize, Serialize};

/// One recorded ballot-cast event.
///
/// Everything except `active` is immutable once the vote is admitted; a
/// challenge flips `active` to false and touches nothing else.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vote {
    /// Sequential identifier assigned at admission.
    pub vote_id: VoteId,
    pub election_id: ElectionId,
    /// The principal who cast the vote.
    pub voter: Address,
    /// The declared candidate (or choice).
    pub candidate_id: CandidateId,
    pub encrypted_ballot: EncryptedBallot,
    pub proof_hash: ProofHash,
    /// Logical height at which the vote was recorded.
    pub recorded_at: Height,
    /// Caller-supplied, stored verbatim. Vote identity comes from
    /// `vote_id`, never from the nonce.
    pub nonce: u64,
    /// `true` = valid, `false` = challenged. One-way transition.
    pub active: bool,
}

/// Read projection returned by a successful verification. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteAttestation {
    pub election_id: ElectionId,
    pub voter: Address,
    pub recorded_at: Height,
    pub verified: bool,
}
