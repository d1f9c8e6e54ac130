//! The vote ledger — admission, verification, and challenge of ballots.

use crate::config::DependencyConfig;
use crate::error::LedgerError;
use crate::oracles::ElectionOracle;
use crate::vote::{Vote, VoteAttestation};
use scrutin_store::{MetaStore, StoreError, VoteStore};
use scrutin_types::{Address, CandidateId, ElectionId, EncryptedBallot, Height, ProofHash, VoteId};
use std::collections::HashMap;

const META_NEXT_VOTE_ID: &str = "next_vote_id";
const META_CONFIG: &str = "dependency_config";

/// The vote ledger state machine.
///
/// Owns the vote table, the voter-vote index, and the dense id counter.
/// Each operation executes to completion against `&mut self` (or `&self`
/// for reads); hosts with concurrent callers must serialize access to the
/// ledger value itself, which keeps every cast atomic from the eligibility
/// check through the index insertion.
pub struct VoteLedger {
    config: Option<DependencyConfig>,
    votes: HashMap<VoteId, Vote>,
    /// (election, voter) -> vote id. Entries are never removed: a
    /// challenged vote still occupies the voter's single-vote slot.
    voter_votes: HashMap<(ElectionId, Address), VoteId>,
    next_vote_id: VoteId,
}

impl VoteLedger {
    /// Create an empty, unconfigured ledger.
    pub fn new() -> Self {
        Self {
            config: None,
            votes: HashMap::new(),
            voter_votes: HashMap::new(),
            next_vote_id: VoteId::FIRST,
        }
    }

    /// Set the three collaborator addresses. Write-once: returns true and
    /// sets all three together iff no configuration exists yet; otherwise
    /// returns false and leaves state unchanged.
    pub fn configure(
        &mut self,
        election_admin: Address,
        voter_registry: Address,
        voter_token: Address,
    ) -> bool {
        if self.config.is_some() {
            return false;
        }
        self.config = Some(DependencyConfig {
            election_admin,
            voter_registry,
            voter_token,
        });
        tracing::debug!("ledger dependencies configured");
        true
    }

    /// Admit one vote for `voter`.
    ///
    /// The validation order is fixed and the first failing check returns
    /// without mutating any state: configuration, election activity,
    /// eligibility, double-vote exclusion, ballot integrity, proof length,
    /// token burn. On success the vote is recorded at `now` with the next
    /// dense id.
    #[allow(clippy::too_many_arguments)]
    pub fn cast_vote(
        &mut self,
        oracle: &dyn ElectionOracle,
        voter: &Address,
        election_id: ElectionId,
        candidate_id: CandidateId,
        encrypted_ballot: Vec<u8>,
        proof: &[u8],
        nonce: u64,
        now: Height,
    ) -> Result<VoteId, LedgerError> {
        if self.config.is_none() {
            return Err(LedgerError::ConfigurationMissing);
        }
        if !oracle.is_election_active(election_id) {
            return Err(LedgerError::ElectionNotActive(election_id));
        }
        if !oracle.is_voter_eligible(election_id, voter) {
            return Err(LedgerError::VoterIneligible {
                election: election_id,
                voter: voter.clone(),
            });
        }
        let key = (election_id, voter.clone());
        if self.voter_votes.contains_key(&key) {
            return Err(LedgerError::AlreadyVoted {
                election: election_id,
                voter: voter.clone(),
            });
        }
        if encrypted_ballot.is_empty() {
            return Err(LedgerError::InvalidBallot);
        }
        let proof_hash = ProofHash::from_slice(proof).ok_or(LedgerError::InvalidProof)?;
        if !oracle.burn_voting_token(election_id, voter) {
            return Err(LedgerError::TokenBurnFailed {
                election: election_id,
                voter: voter.clone(),
            });
        }

        let vote_id = self.next_vote_id;
        let vote = Vote {
            vote_id,
            election_id,
            voter: voter.clone(),
            candidate_id,
            encrypted_ballot: EncryptedBallot::new(encrypted_ballot),
            proof_hash,
            recorded_at: now,
            nonce,
            active: true,
        };
        self.votes.insert(vote_id, vote);
        self.voter_votes.insert(key, vote_id);
        self.next_vote_id = self.next_vote_id.next();

        tracing::info!(
            vote_id = %vote_id,
            election = %election_id,
            voter = %voter,
            height = %now,
            "vote recorded"
        );
        Ok(vote_id)
    }

    /// Verify a recorded vote against a claimed candidate and proof.
    ///
    /// Read-only. A missing or challenged vote is reported as
    /// [`LedgerError::VoteNotFound`]; verification requires both
    /// existence and current validity.
    pub fn verify_vote(
        &self,
        vote_id: VoteId,
        expected_candidate: CandidateId,
        expected_proof: &[u8],
    ) -> Result<VoteAttestation, LedgerError> {
        let vote = self
            .votes
            .get(&vote_id)
            .filter(|v| v.active)
            .ok_or(LedgerError::VoteNotFound(vote_id))?;
        if vote.candidate_id != expected_candidate {
            return Err(LedgerError::WrongCandidate {
                vote_id,
                expected: expected_candidate,
            });
        }
        if expected_proof != &vote.proof_hash.as_bytes()[..] {
            return Err(LedgerError::InvalidProof);
        }
        Ok(VoteAttestation {
            election_id: vote.election_id,
            voter: vote.voter.clone(),
            recorded_at: vote.recorded_at,
            verified: true,
        })
    }

    /// Mark a vote as challenged. The transition is one-way.
    ///
    /// Only the `active` flag changes; the record itself and the voter's
    /// index slot survive. A second challenge of the same id reports
    /// [`LedgerError::VoteNotFound`], like a challenge of an id that was
    /// never allocated.
    pub fn challenge_vote(&mut self, vote_id: VoteId) -> Result<(), LedgerError> {
        let vote = self
            .votes
            .get_mut(&vote_id)
            .filter(|v| v.active)
            .ok_or(LedgerError::VoteNotFound(vote_id))?;
        vote.active = false;
        tracing::info!(vote_id = %vote_id, election = %vote.election_id, "vote challenged");
        Ok(())
    }

    /// Look up a vote record by id.
    pub fn get_vote(&self, vote_id: VoteId) -> Option<&Vote> {
        self.votes.get(&vote_id)
    }

    /// Whether the voter has a recorded vote (active or challenged) in the
    /// election.
    pub fn has_voted(&self, election_id: ElectionId, voter: &Address) -> bool {
        self.voter_votes.contains_key(&(election_id, voter.clone()))
    }

    /// The configured collaborator addresses, if any.
    pub fn config(&self) -> Option<&DependencyConfig> {
        self.config.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Number of recorded votes, challenged ones included.
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// The id the next successful cast will receive.
    pub fn next_vote_id(&self) -> VoteId {
        self.next_vote_id
    }
}

impl VoteLedger {
    /// Persist the full ledger state to a vote store.
    pub fn save_to_store(&self, store: &dyn VoteStore) -> Result<(), StoreError> {
        store.put_meta(META_NEXT_VOTE_ID, &self.next_vote_id.as_u64().to_be_bytes())?;
        match &self.config {
            Some(config) => {
                let bytes = bincode::serialize(config)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                store.put_meta(META_CONFIG, &bytes)?;
            }
            None => store.delete_meta(META_CONFIG)?,
        }
        for (id, vote) in &self.votes {
            let bytes =
                bincode::serialize(vote).map_err(|e| StoreError::Serialization(e.to_string()))?;
            store.put_vote(*id, &bytes)?;
        }
        for ((election_id, voter), id) in &self.voter_votes {
            store.put_voter_index(*election_id, voter, *id)?;
        }
        tracing::debug!(votes = self.votes.len(), "ledger snapshot saved");
        Ok(())
    }

    /// Restore a ledger from a vote store.
    ///
    /// An empty store loads as the pristine unconfigured ledger. When the
    /// id-counter meta key is absent the counter is rebuilt from the
    /// record count, which equals the next id while ids stay dense.
    pub fn load_from_store(store: &dyn VoteStore) -> Result<Self, StoreError> {
        let config = match store.get_meta(META_CONFIG)? {
            Some(bytes) => Some(
                bincode::deserialize(&bytes)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        let mut votes = HashMap::new();
        for (id, bytes) in store.iter_votes()? {
            let vote: Vote = bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            votes.insert(id, vote);
        }

        let mut voter_votes = HashMap::new();
        for (election_id, voter, id) in store.iter_voter_index()? {
            voter_votes.insert((election_id, voter), id);
        }

        let next_vote_id = match store.get_meta(META_NEXT_VOTE_ID)? {
            Some(bytes) if bytes.len() >= 8 => {
                VoteId::new(u64::from_be_bytes(bytes[..8].try_into().unwrap()))
            }
            _ => VoteId::new(votes.len() as u64),
        };

        tracing::debug!(votes = votes.len(), "ledger snapshot loaded");
        Ok(Self {
            config,
            votes,
            voter_votes,
            next_vote_id,
        })
    }
}

impl Default for VoteLedger {
    fn default() -> Self {
        Self::new()
    }
}
