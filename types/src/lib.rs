//! Fundamental types for the scrutin voting ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: principal addresses, proof commitments, ballot payloads,
//! logical heights, and identifier newtypes.

pub mod address;
pub mod ballot;
pub mod height;
pub mod ids;
pub mod proof;

pub use address::Address;
pub use ballot::EncryptedBallot;
pub use height::Height;
pub use ids::{CandidateId, ElectionId, VoteId};
pub use proof::ProofHash;
