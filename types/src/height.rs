//! Logical block height — the ledger's clock.
//!
//! Votes are timestamped with the block/sequence height at which the state
//! transition is applied. The hosting environment supplies the height per
//! operation; the ledger never reads a wall clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical block height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(u64);

impl Height {
    /// Height zero.
    pub const GENESIS: Self = Self(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The height immediately after this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
