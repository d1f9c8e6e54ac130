//! Write-once dependency configuration.

use scrutin_types::Address;
use serde::{Deserialize, Serialize};

/// Addresses of the three external collaborators consulted during vote
/// admission.
///
/// Set exactly once via [`crate::VoteLedger::configure`], all three
/// together or none, and immutable afterwards. Until it exists, no vote
/// can be cast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyConfig {
    /// Administration authority that owns election lifecycle.
    pub election_admin: Address,
    /// Registry deciding voter eligibility.
    pub voter_registry: Address,
    /// Token service consuming voting credentials.
    pub voter_token: Address,
}
