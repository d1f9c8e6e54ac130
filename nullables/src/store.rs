//! Nullable vote store — thread-safe in-memory storage for testing.

use scrutin_store::{MetaStore, StoreError, VoteStore};
use scrutin_types::{Address, ElectionId, VoteId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory [`VoteStore`] for testing.
pub struct NullVoteStore {
    votes: Mutex<HashMap<u64, Vec<u8>>>,
    voter_index: Mutex<HashMap<(ElectionId, Address), VoteId>>,
    meta: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullVoteStore {
    pub fn new() -> Self {
        Self {
            votes: Mutex::new(HashMap::new()),
            voter_index: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullVoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaStore for NullVoteStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn delete_meta(&self, key: &str) -> Result<(), StoreError> {
        self.meta.lock().unwrap().remove(key);
        Ok(())
    }
}

impl VoteStore for NullVoteStore {
    fn put_vote(&self, id: VoteId, bytes: &[u8]) -> Result<(), StoreError> {
        self.votes
            .lock()
            .unwrap()
            .insert(id.as_u64(), bytes.to_vec());
        Ok(())
    }

    fn get_vote(&self, id: VoteId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.votes.lock().unwrap().get(&id.as_u64()).cloned())
    }

    fn iter_votes(&self) -> Result<Vec<(VoteId, Vec<u8>)>, StoreError> {
        Ok(self
            .votes
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (VoteId::new(*id), bytes.clone()))
            .collect())
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        Ok(self.votes.lock().unwrap().len() as u64)
    }

    fn put_voter_index(
        &self,
        election_id: ElectionId,
        voter: &Address,
        id: VoteId,
    ) -> Result<(), StoreError> {
        self.voter_index
            .lock()
            .unwrap()
            .insert((election_id, voter.clone()), id);
        Ok(())
    }

    fn get_voter_index(
        &self,
        election_id: ElectionId,
        voter: &Address,
    ) -> Result<Option<VoteId>, StoreError> {
        Ok(self
            .voter_index
            .lock()
            .unwrap()
            .get(&(election_id, voter.clone()))
            .copied())
    }

    fn iter_voter_index(&self) -> Result<Vec<(ElectionId, Address, VoteId)>, StoreError> {
        Ok(self
            .voter_index
            .lock()
            .unwrap()
            .iter()
            .map(|((election_id, voter), id)| (*election_id, voter.clone(), *id))
            .collect())
    }
}
