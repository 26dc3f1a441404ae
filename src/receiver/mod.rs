//! Receivers for finished profiling records.
//!
//! Provide your own implementation of [`ProfilingReceiver`], or use one of the
//! ready-made receivers below. One receiver is normally shared by every runner
//! in a process, so implementations must be safe to call from many threads at once.

mod json_lines;
mod logger;
mod recording;

pub use json_lines::JsonLinesReceiver;
pub use logger::TracingReceiver;
pub use recording::RecordingReceiver;

use crate::record::ProfilingRecord;

pub trait ProfilingReceiver: Send + Sync {
    /// Receives the record of one finished, non-silent scope.
    fn on_information_received(&self, record: ProfilingRecord);
}

/// Adapts a closure into a [`ProfilingReceiver`].
pub struct FnReceiver<F> {
    f: F,
}

impl<F> FnReceiver<F>
where
    F: Fn(ProfilingRecord) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        FnReceiver { f }
    }
}

impl<F> ProfilingReceiver for FnReceiver<F>
where
    F: Fn(ProfilingRecord) + Send + Sync,
{
    fn on_information_received(&self, record: ProfilingRecord) {
        (self.f)(record)
    }
}
