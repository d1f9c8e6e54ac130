//! Nullable infrastructure for deterministic testing.
//!
//! The vote ledger reaches its external collaborators (election oracle,
//! vote store, clock) through traits. This crate implements those traits
//! with doubles whose answers are fixed programmatically, so tests stay
//! deterministic and never touch the filesystem or network. Swap them in
//! wherever a test would otherwise need the real services.

pub mod clock;
pub mod oracle;
pub mod store;

pub use clock::NullClock;
pub use oracle::NullOracle;
pub use store::NullVoteStore;
