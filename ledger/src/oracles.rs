//! External collaborator capabilities consumed during vote admission.

use scrutin_types::{Address, ElectionId};

/// Boolean oracle over the three external decisions consulted by
/// [`crate::VoteLedger::cast_vote`]: election activity, voter eligibility,
/// and voting-token consumption.
///
/// Production implementations bridge to the real administration, registry,
/// and token services; deterministic test variants live in
/// `scrutin-nullables`. The receivers are `&self`; implementations that
/// track state (e.g. consumed tokens) use interior mutability.
pub trait ElectionOracle {
    /// Whether the election currently accepts votes.
    fn is_election_active(&self, election_id: ElectionId) -> bool;

    /// Whether the voter may cast a ballot in this election.
    fn is_voter_eligible(&self, election_id: ElectionId, voter: &Address) -> bool;

    /// Consume one voting credential for this voter and election.
    /// Returns true when the consumption succeeded.
    fn burn_voting_token(&self, election_id: ElectionId, voter: &Address) -> bool;
}
