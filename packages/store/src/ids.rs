//! Local ID allocation.
//!
//! Locally created records get time-based IDs (milliseconds since the Unix
//! epoch). The allocator bumps past the previous allocation, every existing
//! local ID and the kind's [`Record::REMOTE_ID_CEILING`], so IDs stay unique
//! even when two records are created within the same millisecond.

use std::cell::Cell;

use crate::models::Record;

/// Monotonic, time-based ID source.
#[derive(Debug)]
pub struct IdAllocator {
    last: Cell<u64>,
    clock: fn() -> u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Allocator driven by a custom clock (tests use a frozen one).
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            last: Cell::new(0),
            clock,
        }
    }

    /// Next ID for kind `R`, strictly above everything in `existing`.
    pub fn next<R: Record>(&self, existing: impl IntoIterator<Item = u64>) -> u64 {
        let floor = existing
            .into_iter()
            .fold(R::REMOTE_ID_CEILING.max(self.last.get()), u64::max);
        let id = (self.clock)().max(floor.saturating_add(1));
        self.last.set(id);
        id
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
