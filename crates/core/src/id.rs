//! Identity allocation
//!
//! Each store owns one [`IdAllocator`]. Identities start at 1, strictly
//! increase, and are never reused within the process lifetime.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic monotonic identity counter
///
/// The only mutation is [`IdAllocator::next`]; the counter cannot be set
/// or rewound once constructed.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// First identity handed out by a fresh allocator
    pub const FIRST: u64 = 1;

    /// Create an allocator whose first identity is 1
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(Self::FIRST),
        }
    }

    /// Allocate the next identity
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Identity the next call to [`IdAllocator::next`] would return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
