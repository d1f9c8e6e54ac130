//! Metadata storage trait.

use crate::StoreError;

/// Generic key-value store for ledger bookkeeping that doesn't belong in
/// any domain-specific store (id counters, dependency configuration).
pub trait MetaStore {
    /// Store a metadata value.
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value, `None` if the key was never written.
    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Delete a metadata entry. Deleting an absent key is not an error.
    fn delete_meta(&self, key: &str) -> Result<(), StoreError>;
}
