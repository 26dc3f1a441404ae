use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::Location;
use std::time::Duration;

/// Results of timing one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilingRecord {
    /// Identifies the block being profiled
    pub tag: String,
    /// How long the profiled block took
    pub duration: Duration,
    /// When true the record is measured but never handed to a receiver
    pub silent: bool,
    /// File of the call site that opened the scope
    pub source_file: String,
    /// Line of the call site that opened the scope
    pub source_line: u32,
    /// Wall-clock time the scope was opened at
    pub started_at: DateTime<Utc>,
}

impl ProfilingRecord {
    pub(crate) fn open(tag: String, silent: bool, location: SourceLocation) -> Self {
        ProfilingRecord {
            tag,
            duration: Duration::ZERO,
            silent,
            source_file: location.file.to_string(),
            source_line: location.line,
            started_at: Utc::now(),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn duration_us(&self) -> u64 {
        u64::try_from(self.duration.as_micros()).unwrap_or(u64::MAX)
    }
}

/// Call-site metadata for a timed scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        SourceLocation { file, line }
    }

    /// Placeholder for callers that have no location to give.
    pub const fn unknown() -> Self {
        SourceLocation { file: "unknown", line: 0 }
    }

    /// Location of whoever called the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        SourceLocation {
            file: location.file(),
            line: location.line(),
        }
    }
}
