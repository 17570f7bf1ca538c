//! Build logging and timing spans.
//!
//! The build logger is observability only: spans never gate control flow.
//! Each unit of build work opens a [`TimeSpan`] at entry and finishes it with
//! a completion label; the elapsed time is emitted as a `tracing` event.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

/// Logger handle carried on the build configuration.
///
/// Cloning is cheap and clones observe the same counters, so a per-render
/// shallow copy of the configuration still reports into the build's logger.
#[derive(Debug, Clone, Default)]
pub struct BuildLogger {
	finished_spans: Arc<AtomicU64>,
}

impl BuildLogger {
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens a named stopwatch and logs the start label.
	pub fn create_time_span(&self, start_label: impl AsRef<str>) -> TimeSpan {
		debug!(target: "tern::build", "{}", start_label.as_ref());
		TimeSpan {
			started: Instant::now(),
			finished_spans: Arc::clone(&self.finished_spans),
		}
	}

	/// How many spans created by this logger have been finished.
	pub fn finished_span_count(&self) -> u64 {
		self.finished_spans.load(Ordering::Relaxed)
	}
}

/// A named stopwatch opened by [`BuildLogger::create_time_span`].
///
/// Finishing consumes the span, so a span can be finished at most once.
/// Dropping an unfinished span discards it without logging a completion.
#[derive(Debug)]
pub struct TimeSpan {
	started: Instant,
	finished_spans: Arc<AtomicU64>,
}

impl TimeSpan {
	/// Stops the clock, logs the end label and returns the elapsed time.
	pub fn finish(self, end_label: impl AsRef<str>) -> Duration {
		let elapsed = self.started.elapsed();
		self.finished_spans.fetch_add(1, Ordering::Relaxed);
		debug!(
			target: "tern::build",
			duration_ms = elapsed.as_millis() as u64,
			"{}",
			end_label.as_ref()
		);
		elapsed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_finish_increments_counter_once() {
		let logger = BuildLogger::new();
		assert_eq!(logger.finished_span_count(), 0);

		let span = logger.create_time_span("work, started");
		span.finish("work, finished");

		assert_eq!(logger.finished_span_count(), 1);
	}

	#[test]
	fn test_dropped_span_is_not_counted() {
		let logger = BuildLogger::new();

		let span = logger.create_time_span("work, started");
		drop(span);

		assert_eq!(logger.finished_span_count(), 0);
	}

	#[test]
	fn test_clones_report_into_the_same_counter() {
		let logger = BuildLogger::new();
		let clone = logger.clone();

		clone.create_time_span("a").finish("a done");
		logger.create_time_span("b").finish("b done");

		assert_eq!(logger.finished_span_count(), 2);
		assert_eq!(clone.finished_span_count(), 2);
	}

	#[test]
	fn test_finish_returns_elapsed_time() {
		let logger = BuildLogger::new();
		let span = logger.create_time_span("timed");

		let elapsed = span.finish("timed done");

		assert!(elapsed >= Duration::ZERO);
	}
}
