//! Opaque principal addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An on-ledger principal: a voter identity or the address of an external
/// collaborator (administration authority, eligibility registry, token
/// service).
///
/// The ledger compares principals only for equality and imposes no internal
/// structure on them; the hosting environment owns the address format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create a principal address from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
