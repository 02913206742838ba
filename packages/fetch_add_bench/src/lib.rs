//! Measures the throughput cost of incrementing a shared 64-bit counter under
//! contention.
//!
//! Fourteen benchmark variants cover the interesting corners of the design space:
//!
//! - [`NonAtomicBaseline`] increments a private unsynchronized counter per worker
//!   thread, anchoring the "best case, no sharing" end of the results.
//! - [`NonAtomicBenchmark`] shares one unsynchronized counter between all workers.
//!   This is a deliberate data race, kept as a labeled hazard reference rather than
//!   fixed, because a synchronized counter would no longer measure the hazard.
//! - [`AtomicBaseline`] increments a private atomic counter per worker for each
//!   [`MemoryOrder`], isolating the fixed cost of the atomic instruction.
//! - [`AtomicBenchmark`] shares one atomic counter between all workers for each
//!   [`MemoryOrder`], measuring the ordering modes under real multi-core contention.
//!
//! [`run_sweep()`] drives a list of variants across increasing thread counts, one
//! fully-joined trial at a time, and reports the wall-clock duration of every trial
//! in whole milliseconds.
//!
//! This package is not meant for use in production, serving only as a development
//! tool for benchmarking and performance analysis.
//!
//! # Example
//!
//! ```
//! use fetch_add_bench::{AtomicBenchmark, Benchmark, MemoryOrder, run_sweep};
//! use new_zealand::nz;
//!
//! let benchmarks: Vec<Box<dyn Benchmark>> = vec![Box::new(
//!     AtomicBenchmark::with_iterations(MemoryOrder::Relaxed, 1000),
//! )];
//!
//! let mut output = Vec::new();
//! run_sweep(&benchmarks, nz!(2), &mut output).expect("writing to a Vec cannot fail");
//!
//! let report = String::from_utf8(output).expect("the report is plain ASCII");
//! assert!(report.starts_with("Atomic Benchmark (relaxed): numThreads = 1 ... "));
//! ```

mod benchmark;
mod counter;
mod order;
mod stopwatch;
mod sweep;

pub use benchmark::*;
pub use counter::*;
pub use order::*;
pub use sweep::*;
