//! Single-use timing scope that reports its own duration on close

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::record::{ProfilingRecord, SourceLocation};

/// One in-flight measurement.
///
/// The clock starts when the token is opened and stops when it is closed,
/// either explicitly through [`TimingToken::close`] or by going out of scope.
/// A token closes exactly once. Unless the token is silent, the finished
/// [`ProfilingRecord`] is handed to `deliver` on the closing thread.
pub struct TimingToken<D>
where
    D: FnOnce(ProfilingRecord),
{
    pending: Option<(ProfilingRecord, D)>,
    start: Instant,
}

impl<D> TimingToken<D>
where
    D: FnOnce(ProfilingRecord),
{
    pub fn open(deliver: D, tag: impl Into<String>, silent: bool, location: SourceLocation) -> Self {
        let record = ProfilingRecord::open(tag.into(), silent, location);
        tracing::trace!(tag = %record.tag, silent = silent, "Timing scope opened");
        // Clock starts last so setup isn't measured
        TimingToken {
            pending: Some((record, deliver)),
            start: Instant::now(),
        }
    }

    /// Open a token located at the caller's call site.
    #[track_caller]
    pub fn start(deliver: D, tag: impl Into<String>, silent: bool) -> Self {
        let location = SourceLocation::caller();
        Self::open(deliver, tag, silent, location)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn tag(&self) -> &str {
        self.pending.as_ref().map_or("", |(record, _)| record.tag.as_str())
    }

    pub fn is_silent(&self) -> bool {
        self.pending.as_ref().map_or(true, |(record, _)| record.silent)
    }

    /// Stop the clock now and deliver the record.
    pub fn close(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        let Some((mut record, deliver)) = self.pending.take() else {
            return;
        };
        record.duration = self.start.elapsed();
        tracing::trace!(
            tag = %record.tag,
            duration_ms = record.duration_ms(),
            silent = record.silent,
            "Timing scope closed"
        );

        if record.silent {
            return;
        }

        if std::thread::panicking() {
            // A second panic escaping a drop during unwinding would abort the process
            let tag = record.tag.clone();
            if panic::catch_unwind(AssertUnwindSafe(|| deliver(record))).is_err() {
                tracing::error!(tag = %tag, "Profiling receiver panicked while timed work was unwinding");
            }
        } else {
            deliver(record);
        }
    }
}

impl<D> Drop for TimingToken<D>
where
    D: FnOnce(ProfilingRecord),
{
    fn drop(&mut self) {
        self.finish();
    }
}
