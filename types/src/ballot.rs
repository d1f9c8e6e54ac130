//! Encrypted ballot payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The opaque encrypted content of a voter's choice.
///
/// The ledger stores the ciphertext verbatim and never decrypts it. The
/// only structural requirement is that an admitted ballot is non-empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBallot(Vec<u8>);

impl EncryptedBallot {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for EncryptedBallot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptedBallot({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for EncryptedBallot {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
