//! Vote admission and verification ledger.
//!
//! The core ballot-casting state machine for an electronic voting process:
//! one vote per eligible voter per election, double-vote prevention, ballot
//! integrity checks, post-hoc challenge (revocation) of a recorded vote,
//! and independent verification of a vote's content against a claimed
//! candidate and its 32-byte proof commitment.
//!
//! Election lifecycle, voter eligibility, and token consumption are
//! external collaborators reached through the [`ElectionOracle`] capability
//! trait. The ledger does not tally votes and never decrypts ballots.

pub mod config;
pub mod error;
pub mod ledger;
pub mod oracles;
pub mod vote;

pub use config::DependencyConfig;
pub use error::LedgerError;
pub use ledger::VoteLedger;
pub use oracles::ElectionOracle;
pub use vote::{Vote, VoteAttestation};
