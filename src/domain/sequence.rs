//! Request Sequence Numbers
//!
//! Every request sent to blehostd carries a sequence number so the
//! response that comes back later can be matched to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Correlation ID assigned to a single outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BleSeq(pub u32);

impl BleSeq {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BleSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide sequence space shared by every `RequestFactory` built with
/// `RequestFactory::default()`.
static GLOBAL: SequenceGenerator = SequenceGenerator::new();

/// Monotonic counter handing out sequence numbers.
///
/// The first value returned is 1. Wrapping past `u32::MAX` is not handled.
#[derive(Debug)]
pub struct SequenceGenerator {
    next: AtomicU32,
}

impl SequenceGenerator {
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }

    /// The sequence space shared by the whole process
    pub fn global() -> &'static SequenceGenerator {
        &GLOBAL
    }

    /// Reserve the next sequence number
    pub fn next_seq(&self) -> BleSeq {
        // fetch_add is a single atomic RMW, so concurrent callers never
        // observe the same value.
        BleSeq(self.next.fetch_add(1, Ordering::Relaxed).wrapping_add(1))
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
