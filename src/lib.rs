//! Scoped wall-clock profiling.
//!
//! Wrap a block of sync or async work in a [`TimedRunner`] call and the time it
//! took is reported, together with a tag and the call site, to a
//! [`ProfilingReceiver`] of your choosing.
//!
//! ```
//! use std::sync::Arc;
//! use scoped_profiler::{RecordingReceiver, TimedRunner};
//!
//! let receiver = Arc::new(RecordingReceiver::new());
//! let runner = TimedRunner::from_shared(receiver.clone());
//! runner.set_enabled(true);
//!
//! let sum = runner.time_tagged("sum", || (1..=10).sum::<u32>());
//! assert_eq!(sum, 55);
//! assert_eq!(receiver.records()[0].tag, "sum");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod receiver;
pub mod record;
pub mod runner;
pub mod tag;
pub mod token;

pub use config::{get_config, ProfilerConfig};
pub use error::{ErrorStage, ProfilerError};
pub use receiver::{FnReceiver, JsonLinesReceiver, ProfilingReceiver, RecordingReceiver, TracingReceiver};
pub use record::{ProfilingRecord, SourceLocation};
pub use runner::{TimedRunner, TimedRunnerBuilder};
pub use token::TimingToken;

#[cfg(test)]
#[path = "../tests/unit/error_handling_test.rs"]
mod error_handling_test;
#[cfg(test)]
#[path = "../tests/unit/tag_test.rs"]
mod tag_test;
#[cfg(test)]
#[path = "../tests/unit/token_test.rs"]
mod token_test;
