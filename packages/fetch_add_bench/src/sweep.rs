use std::io;
use std::num::NonZero;

use crate::Benchmark;

/// Runs every benchmark through the full sweep of thread counts, reporting one line
/// per trial to `output`.
///
/// Benchmarks execute strictly in the given order. Within one benchmark, thread counts
/// sweep from 1 to `max_threads` inclusive, one trial at a time; a trial's workers are
/// all joined before the next trial starts, so trials never contend with each other.
/// The output ordering is therefore deterministic even though the timings are not.
///
/// Each line is emitted in two parts. The `"<name>: numThreads = <n> ... "` prefix is
/// flushed before the trial starts, so a reader watching the output can tell which
/// trial is in flight, and the elapsed milliseconds complete the line once the trial's
/// workers have all been joined.
///
/// # Errors
///
/// Propagates any error from writing to `output`. Nothing else in the sweep can fail.
///
/// # Examples
///
/// ```
/// use fetch_add_bench::{run_sweep, standard_benchmarks_with_iterations};
/// use new_zealand::nz;
///
/// let benchmarks = standard_benchmarks_with_iterations(100);
///
/// let mut output = Vec::new();
/// run_sweep(&benchmarks, nz!(2), &mut output).expect("writing to a Vec cannot fail");
///
/// let report = String::from_utf8(output).expect("the report is plain ASCII");
/// assert_eq!(report.lines().count(), benchmarks.len() * 2);
/// ```
pub fn run_sweep(
    benchmarks: &[Box<dyn Benchmark>],
    max_threads: NonZero<usize>,
    output: &mut dyn io::Write,
) -> io::Result<()> {
    for benchmark in benchmarks {
        for threads in 1..=max_threads.get() {
            let threads =
                NonZero::new(threads).expect("sweep range starts at 1, so zero never occurs");

            write!(output, "{}: numThreads = {threads} ... ", benchmark.name())?;
            output.flush()?;

            let elapsed = benchmark.run_with_threads(threads);

            writeln!(output, "{} ms", elapsed.as_millis())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use new_zealand::nz;

    use super::*;
    use crate::{
        AtomicBenchmark, MemoryOrder, NonAtomicBaseline, standard_benchmarks_with_iterations,
    };

    const TEST_ITERATIONS: u64 = 100;

    /// An in-memory writer that records where in the byte stream each flush landed.
    #[derive(Debug, Default)]
    struct RecordingWriter {
        bytes: Vec<u8>,
        flush_positions: Vec<usize>,
    }

    impl io::Write for RecordingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flush_positions.push(self.bytes.len());
            Ok(())
        }
    }

    #[test]
    fn single_thread_sweep_runs_one_trial_per_benchmark() {
        let benchmarks = standard_benchmarks_with_iterations(TEST_ITERATIONS);

        let mut output = Vec::new();
        run_sweep(&benchmarks, nz!(1), &mut output).expect("writing to a Vec cannot fail");

        let report = String::from_utf8(output).expect("the report is plain ASCII");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), benchmarks.len());

        for (line, benchmark) in lines.iter().zip(&benchmarks) {
            let prefix = format!("{}: numThreads = 1 ... ", benchmark.name());

            let remainder = line
                .strip_prefix(&prefix)
                .expect("every line starts with its benchmark's progress prefix");

            let millis = remainder
                .strip_suffix(" ms")
                .expect("every line ends with a millisecond duration");

            assert!(millis.parse::<u128>().is_ok(), "not a duration: {millis}");
        }
    }

    #[test]
    fn thread_counts_sweep_upwards_within_each_benchmark() {
        let benchmarks: Vec<Box<dyn Benchmark>> = vec![
            Box::new(NonAtomicBaseline::with_iterations(TEST_ITERATIONS)),
            Box::new(AtomicBenchmark::with_iterations(
                MemoryOrder::Relaxed,
                TEST_ITERATIONS,
            )),
        ];

        let mut output = Vec::new();
        run_sweep(&benchmarks, nz!(3), &mut output).expect("writing to a Vec cannot fail");

        let report = String::from_utf8(output).expect("the report is plain ASCII");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 6);

        let mut expected = Vec::new();
        for benchmark in &benchmarks {
            for threads in 1..=3 {
                expected.push(format!("{}: numThreads = {threads} ... ", benchmark.name()));
            }
        }

        for (line, prefix) in lines.iter().zip(&expected) {
            assert!(
                line.starts_with(prefix),
                "expected {line:?} to start with {prefix:?}"
            );
        }
    }

    #[test]
    fn progress_prefix_is_flushed_before_the_trial_completes() {
        let benchmarks: Vec<Box<dyn Benchmark>> = vec![Box::new(
            AtomicBenchmark::with_iterations(MemoryOrder::SeqCst, TEST_ITERATIONS),
        )];

        let mut output = RecordingWriter::default();
        run_sweep(&benchmarks, nz!(1), &mut output).expect("in-memory writes cannot fail");

        let prefix = "Atomic Benchmark (seq_cst): numThreads = 1 ... ";

        // The first flush must land exactly at the end of the progress prefix,
        // with the duration only written afterwards.
        assert_eq!(output.flush_positions.first(), Some(&prefix.len()));
        assert!(output.bytes.len() > prefix.len());
    }

    /// Forwards to a shared [`AtomicBenchmark`] so a test can keep a handle to the
    /// counter while the sweep owns the boxed benchmark.
    #[derive(Debug)]
    struct SharedHandle(Arc<AtomicBenchmark>);

    impl Benchmark for SharedHandle {
        fn name(&self) -> String {
            self.0.name()
        }

        fn run_worker(&self) {
            self.0.run_worker();
        }
    }

    #[test]
    fn full_sweep_drives_every_trial_of_the_contended_counter() {
        let benchmark = Arc::new(AtomicBenchmark::with_iterations(
            MemoryOrder::AcqRel,
            TEST_ITERATIONS,
        ));

        let benchmarks: Vec<Box<dyn Benchmark>> =
            vec![Box::new(SharedHandle(Arc::clone(&benchmark)))];

        let mut output = Vec::new();
        run_sweep(&benchmarks, nz!(3), &mut output).expect("writing to a Vec cannot fail");

        // Trials at 1, 2 and 3 threads all accumulate on the never-reset shared
        // counter, so it ends at six times the per-worker iteration count.
        assert_eq!(benchmark.counter_value(), 600);
    }
}
