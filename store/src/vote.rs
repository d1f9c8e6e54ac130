//! Vote record and voter-index storage trait.

use crate::meta::MetaStore;
use crate::StoreError;
use scrutin_types::{Address, ElectionId, VoteId};

/// Trait for persisting vote records and the voter-vote index.
///
/// Records are stored as opaque serialized bytes; the ledger owns the
/// encoding. Backends also expose [`MetaStore`] for the id counter and
/// the dependency configuration.
pub trait VoteStore: MetaStore {
    /// Store (or overwrite) the serialized record for a vote id.
    fn put_vote(&self, id: VoteId, bytes: &[u8]) -> Result<(), StoreError>;

    /// Retrieve the serialized record for a vote id.
    fn get_vote(&self, id: VoteId) -> Result<Option<Vec<u8>>, StoreError>;

    /// Iterate all stored vote records.
    fn iter_votes(&self) -> Result<Vec<(VoteId, Vec<u8>)>, StoreError>;

    /// Number of stored vote records.
    fn vote_count(&self) -> Result<u64, StoreError>;

    /// Record the voter-vote index entry for an (election, voter) pair.
    fn put_voter_index(
        &self,
        election_id: ElectionId,
        voter: &Address,
        id: VoteId,
    ) -> Result<(), StoreError>;

    /// Look up the vote id recorded for an (election, voter) pair.
    fn get_voter_index(
        &self,
        election_id: ElectionId,
        voter: &Address,
    ) -> Result<Option<VoteId>, StoreError>;

    /// Iterate all voter-vote index entries.
    fn iter_voter_index(&self) -> Result<Vec<(ElectionId, Address, VoteId)>, StoreError>;
}
