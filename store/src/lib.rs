//! Abstract storage traits for the scrutin voting ledger.
//!
//! Every storage backend (embedded database, in-memory for testing)
//! implements these traits. The rest of the workspace depends only on the
//! traits, never on a concrete backend.

pub mod error;
pub mod meta;
pub mod vote;

pub use error::StoreError;
pub use meta::MetaStore;
pub use vote::VoteStore;
