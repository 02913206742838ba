//! Entry point for the increment-cost benchmark suite.
//!
//! Runs every variant in the standard list through the full thread-count sweep and
//! reports one line per trial to stdout. There is no configuration surface; the
//! program is a one-shot measurement run and any unexpected failure is fatal.

use std::io;
use std::num::NonZero;

use fetch_add_bench::{run_sweep, standard_benchmarks};
use new_zealand::nz;

/// The highest worker thread count the sweep reaches.
const MAX_THREADS: NonZero<usize> = nz!(10);

fn main() {
    let benchmarks = standard_benchmarks();

    let stdout = io::stdout();

    run_sweep(&benchmarks, MAX_THREADS, &mut stdout.lock())
        .expect("failed to write benchmark results to stdout");
}
