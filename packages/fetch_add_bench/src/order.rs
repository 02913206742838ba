use std::sync::atomic::Ordering;

use derive_more::Display;

/// The memory-ordering mode an atomic benchmark variant applies to its increments.
///
/// The six modes mirror the orderings selectable for an atomic read-modify-write in the
/// C++ memory model, which is where the cross-language comparisons this tool feeds into
/// come from. Rust does not expose a consume ordering; [`MemoryOrder::Consume`] executes
/// as acquire, which is also how production C++ compilers implement consume. The label
/// keeps the `consume` name so reported results remain comparable.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::Ordering;
///
/// use fetch_add_bench::MemoryOrder;
///
/// assert_eq!(MemoryOrder::Relaxed.to_string(), "relaxed");
/// assert_eq!(MemoryOrder::Consume.ordering(), Ordering::Acquire);
/// ```
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of memory orderings is fixed by the memory model"
)]
pub enum MemoryOrder {
    /// No ordering constraints; only the atomicity of the operation itself.
    #[display("relaxed")]
    Relaxed,

    /// Dependency ordering on the loaded value. Executed as acquire.
    #[display("consume")]
    Consume,

    /// All subsequent memory operations stay after the atomic operation.
    #[display("acquire")]
    Acquire,

    /// All preceding memory operations stay before the atomic operation.
    #[display("release")]
    Release,

    /// Acquire and release combined, as appropriate for a read-modify-write.
    #[display("acq_rel")]
    AcqRel,

    /// Acquire-release plus a single total order over all such operations.
    #[display("seq_cst")]
    SeqCst,
}

impl MemoryOrder {
    /// Every ordering mode, weakest first.
    ///
    /// The standard benchmark list derives one uncontended and one contended atomic
    /// variant from each entry.
    pub const ALL: [Self; 6] = [
        Self::Relaxed,
        Self::Consume,
        Self::Acquire,
        Self::Release,
        Self::AcqRel,
        Self::SeqCst,
    ];

    /// The ordering applied to this mode's `fetch_add` calls.
    #[must_use]
    pub fn ordering(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            // Consume has no Rust equivalent; acquire is its conservative implementation.
            Self::Consume | Self::Acquire => Ordering::Acquire,
            Self::Release => Ordering::Release,
            Self::AcqRel => Ordering::AcqRel,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn labels_are_stable() {
        let labels: Vec<String> = MemoryOrder::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(
            labels,
            ["relaxed", "consume", "acquire", "release", "acq_rel", "seq_cst"]
        );
    }

    #[test]
    fn all_modes_are_distinct() {
        let distinct: HashSet<MemoryOrder> = MemoryOrder::ALL.into_iter().collect();

        assert_eq!(distinct.len(), MemoryOrder::ALL.len());
    }

    #[test]
    fn consume_executes_as_acquire() {
        assert_eq!(MemoryOrder::Consume.ordering(), Ordering::Acquire);
    }

    #[test]
    fn every_mode_is_valid_for_read_modify_write() {
        // All six orderings must be accepted by `fetch_add`, including the
        // store-flavored ones that plain loads would reject.
        use std::sync::atomic::AtomicU64;

        for order in MemoryOrder::ALL {
            let value = AtomicU64::new(0);
            value.fetch_add(1, order.ordering());

            assert_eq!(value.load(Ordering::Relaxed), 1, "order {order}");
        }
    }
}
