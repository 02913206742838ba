use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::MemoryOrder;

/// A 64-bit counter incremented without any synchronization.
///
/// Accesses go through volatile loads and stores so the increment loop survives an
/// optimizing compiler even when nothing ever reads the result.
///
/// One instance per thread is well-defined and serves as the no-sharing baseline. One
/// instance shared across threads is a genuine data race; the contended non-atomic
/// benchmark shares an instance on purpose, to put a number on that hazard. Keep it
/// unsynchronized: a synchronized counter would measure something else entirely.
#[derive(Debug, Default)]
pub struct RacyCounter {
    value: UnsafeCell<u64>,
}

// SAFETY: This type intentionally provides no synchronization. Sharing an instance
// across threads is a data race; the contended non-atomic benchmark exists to measure
// exactly that access pattern.
unsafe impl Sync for RacyCounter {}

impl RacyCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: UnsafeCell::new(0),
        }
    }

    /// Increments the counter `count` times on the calling thread.
    pub fn increment_many(&self, count: u64) {
        let value = self.value.get();

        for _ in 0..count {
            // SAFETY: The cell outlives `&self`. Unsynchronized concurrent access is
            // intended; see the type-level safety comment.
            let current = unsafe { value.read_volatile() };

            // SAFETY: Same as the read above.
            unsafe { value.write_volatile(current.wrapping_add(1)) };
        }
    }

    /// The current value of the counter.
    ///
    /// Under concurrent mutation this observes one moment of an unsynchronized history,
    /// not an exact sum. Increments may have been lost.
    #[must_use]
    pub fn value(&self) -> u64 {
        // SAFETY: The cell outlives `&self`; see the type-level safety comment.
        unsafe { self.value.get().read_volatile() }
    }
}

/// A 64-bit atomic counter that applies one fixed memory-ordering mode to its
/// increments.
///
/// The mode is chosen at construction and never changes, so a counter instance
/// represents exactly one point in the ordering-strength spectrum.
///
/// # Examples
///
/// ```
/// use fetch_add_bench::{MemoryOrder, OrderedCounter};
///
/// let counter = OrderedCounter::new(MemoryOrder::SeqCst);
/// counter.increment_many(10);
///
/// assert_eq!(counter.value(), 10);
/// ```
#[derive(Debug)]
pub struct OrderedCounter {
    value: AtomicU64,
    order: MemoryOrder,
}

impl OrderedCounter {
    /// Creates a counter starting at zero that uses `order` for every increment.
    #[must_use]
    pub const fn new(order: MemoryOrder) -> Self {
        Self {
            value: AtomicU64::new(0),
            order,
        }
    }

    /// The ordering mode this counter applies.
    #[must_use]
    pub fn order(&self) -> MemoryOrder {
        self.order
    }

    /// Increments the counter `count` times on the calling thread.
    ///
    /// Every increment is an atomic read-modify-write. No update is ever lost, no
    /// matter how weak the ordering mode or how many threads share the counter.
    pub fn increment_many(&self, count: u64) {
        let order = self.order.ordering();

        for _ in 0..count {
            self.value.fetch_add(1, order);
        }
    }

    /// The current value of the counter.
    ///
    /// Reads with relaxed ordering. A caller that joined the incrementing threads
    /// before reading observes every increment.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
