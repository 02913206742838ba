use std::hint::black_box;
use std::num::NonZero;
use std::thread;
use std::time::Duration;

use crate::stopwatch::Stopwatch;
use crate::{MemoryOrder, OrderedCounter, RacyCounter};

/// How many increments every worker thread performs in one trial.
///
/// Large enough that the increment loop dwarfs thread startup and the bookkeeping
/// around it.
pub const ITERATIONS: u64 = 500_000_000;

/// A named unit of measurable work.
///
/// Implementations pair a stable display name with a per-thread increment loop. The
/// provided [`run_with_threads()`][Self::run_with_threads] operation turns that loop
/// into one timed trial at a specific level of concurrency.
///
/// # Examples
///
/// ```
/// use fetch_add_bench::{AtomicBenchmark, Benchmark, MemoryOrder};
/// use new_zealand::nz;
///
/// let benchmark = AtomicBenchmark::with_iterations(MemoryOrder::SeqCst, 1000);
///
/// let elapsed = benchmark.run_with_threads(nz!(4));
///
/// println!("{}: {} ms", benchmark.name(), elapsed.as_millis());
/// assert_eq!(benchmark.counter_value(), 4000);
/// ```
pub trait Benchmark: Sync {
    /// The stable human-readable name of this variant.
    ///
    /// Atomic variants embed their ordering label, e.g. `Atomic Benchmark (seq_cst)`.
    #[must_use]
    fn name(&self) -> String;

    /// Executes this variant's full increment loop on the calling thread.
    fn run_worker(&self);

    /// Executes one trial of this benchmark at a specific level of concurrency.
    ///
    /// Spawns exactly `threads` workers, each running
    /// [`run_worker()`][Self::run_worker] to completion, joins them all and returns
    /// the wall-clock time of the spawn-to-join span.
    ///
    /// Trials are repeatable. Variants with shared state keep accumulating across
    /// trials; only the elapsed time of each trial is reported, so the carry-over does
    /// not affect the measurements.
    ///
    /// # Panics
    ///
    /// Panics if a worker thread cannot be spawned or panics. Measurement is a
    /// one-shot batch operation with no recoverable error paths.
    #[must_use]
    fn run_with_threads(&self, threads: NonZero<usize>) -> Duration {
        let watch = Stopwatch::start();

        thread::scope(|scope| {
            let workers: Vec<_> = (0..threads.get())
                .map(|_| scope.spawn(|| self.run_worker()))
                .collect();

            for worker in workers {
                worker
                    .join()
                    .expect("benchmark workers have no panic paths of their own");
            }
        });

        watch.elapsed()
    }
}

/// Increments a fresh unsynchronized counter on every worker thread.
///
/// No state is shared, so there is no contention and no race. This is the cheapest
/// possible rendition of the increment loop and anchors the low end of the results.
#[derive(Debug)]
pub struct NonAtomicBaseline {
    iterations: u64,
}

impl NonAtomicBaseline {
    /// Creates the variant with the production iteration count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_iterations(ITERATIONS)
    }

    /// Creates the variant with a custom per-worker iteration count.
    #[must_use]
    pub fn with_iterations(iterations: u64) -> Self {
        Self { iterations }
    }
}

impl Default for NonAtomicBaseline {
    fn default() -> Self {
        Self::new()
    }
}

impl Benchmark for NonAtomicBaseline {
    fn name(&self) -> String {
        "Non-atomic Baseline".to_string()
    }

    fn run_worker(&self) {
        let counter = RacyCounter::new();
        counter.increment_many(self.iterations);
    }
}

/// Increments one unsynchronized counter shared by every worker thread.
///
/// With more than one worker this is a data race and formally undefined behavior. The
/// variant exists to put a number on exactly that hazard, so it must stay
/// unsynchronized; see [`RacyCounter`].
#[derive(Debug)]
pub struct NonAtomicBenchmark {
    iterations: u64,
    counter: RacyCounter,
}

impl Default for NonAtomicBenchmark {
    fn default() -> Self {
        Self::new()
    }
}

impl NonAtomicBenchmark {
    /// Creates the variant with the production iteration count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_iterations(ITERATIONS)
    }

    /// Creates the variant with a custom per-worker iteration count.
    #[must_use]
    pub fn with_iterations(iterations: u64) -> Self {
        Self {
            iterations,
            counter: RacyCounter::new(),
        }
    }

    /// The accumulated value of the shared counter.
    ///
    /// Increments may have been lost to the race, and the counter is never reset
    /// between trials, so across a sweep this only grows and is at most the total
    /// number of increments attempted.
    #[must_use]
    pub fn counter_value(&self) -> u64 {
        self.counter.value()
    }
}

impl Benchmark for NonAtomicBenchmark {
    fn name(&self) -> String {
        "Non-atomic Benchmark".to_string()
    }

    fn run_worker(&self) {
        self.counter.increment_many(self.iterations);
    }
}

/// Increments a fresh atomic counter on every worker thread, using one fixed
/// memory-ordering mode.
///
/// No contention; measures the standalone cost of the atomic read-modify-write at the
/// given ordering level.
#[derive(Debug)]
pub struct AtomicBaseline {
    iterations: u64,
    order: MemoryOrder,
}

impl AtomicBaseline {
    /// Creates the variant with the production iteration count.
    #[must_use]
    pub fn new(order: MemoryOrder) -> Self {
        Self::with_iterations(order, ITERATIONS)
    }

    /// Creates the variant with a custom per-worker iteration count.
    #[must_use]
    pub fn with_iterations(order: MemoryOrder, iterations: u64) -> Self {
        Self { iterations, order }
    }
}

impl Benchmark for AtomicBaseline {
    fn name(&self) -> String {
        format!("Atomic Baseline ({})", self.order)
    }

    fn run_worker(&self) {
        let counter = OrderedCounter::new(self.order);
        counter.increment_many(self.iterations);

        // The counter is private and never observed, so make sure the optimizer
        // cannot conclude the loop is dead.
        black_box(counter.value());
    }
}

/// Increments one atomic counter shared by every worker thread, using one fixed
/// memory-ordering mode.
///
/// Measures the atomic read-modify-write under real multi-core contention at the given
/// ordering level. The counter never loses updates, even under relaxed ordering.
#[derive(Debug)]
pub struct AtomicBenchmark {
    iterations: u64,
    counter: OrderedCounter,
}

impl AtomicBenchmark {
    /// Creates the variant with the production iteration count.
    #[must_use]
    pub fn new(order: MemoryOrder) -> Self {
        Self::with_iterations(order, ITERATIONS)
    }

    /// Creates the variant with a custom per-worker iteration count.
    #[must_use]
    pub fn with_iterations(order: MemoryOrder, iterations: u64) -> Self {
        Self {
            iterations,
            counter: OrderedCounter::new(order),
        }
    }

    /// The accumulated value of the shared counter.
    ///
    /// The counter is never reset between trials; after a sweep this holds the sum of
    /// every increment performed across all of the sweep's trials.
    #[must_use]
    pub fn counter_value(&self) -> u64 {
        self.counter.value()
    }
}

impl Benchmark for AtomicBenchmark {
    fn name(&self) -> String {
        format!("Atomic Benchmark ({})", self.counter.order())
    }

    fn run_worker(&self) {
        self.counter.increment_many(self.iterations);
    }
}

/// The full fixed list of benchmark variants, in reporting order.
///
/// Two unsynchronized variants, then an uncontended and a contended atomic variant for
/// each of the six memory-ordering modes, 14 in total.
#[must_use]
pub fn standard_benchmarks() -> Vec<Box<dyn Benchmark>> {
    standard_benchmarks_with_iterations(ITERATIONS)
}

/// The standard variant list with a custom per-worker iteration count.
///
/// Intended for tests and benches that cannot afford [`ITERATIONS`] increments per
/// worker.
#[must_use]
pub fn standard_benchmarks_with_iterations(iterations: u64) -> Vec<Box<dyn Benchmark>> {
    let mut benchmarks: Vec<Box<dyn Benchmark>> = vec![
        Box::new(NonAtomicBaseline::with_iterations(iterations)),
        Box::new(NonAtomicBenchmark::with_iterations(iterations)),
    ];

    for order in MemoryOrder::ALL {
        benchmarks.push(Box::new(AtomicBaseline::with_iterations(order, iterations)));
    }

    for order in MemoryOrder::ALL {
        benchmarks.push(Box::new(AtomicBenchmark::with_iterations(
            order, iterations,
        )));
    }

    benchmarks
}
