//! Nullable clock — deterministic logical heights for testing.

use scrutin_types::Height;
use std::cell::Cell;

/// A deterministic source of logical block heights.
///
/// The height only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial: u64) -> Self {
        Self {
            current: Cell::new(initial),
        }
    }

    /// The current logical height.
    pub fn now(&self) -> Height {
        Height::new(self.current.get())
    }

    /// Advance the height by a number of blocks.
    pub fn advance(&self, blocks: u64) {
        self.current.set(self.current.get() + blocks);
    }

    /// Jump to a specific height.
    pub fn set(&self, height: u64) {
        self.current.set(height);
    }
}
