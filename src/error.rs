use serde::{Serialize, Deserialize};
use std::fmt;

/// Where in the profiler an error was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStage {
    /// Runner wiring, e.g. no receiver supplied
    Configuration,
    /// Reading or parsing a config file
    Config,
    /// Installing the tracing subscriber
    Logging,
    /// Serializing a record
    Serialize,
    Io,
}

impl ErrorStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStage::Configuration => "configuration",
            ErrorStage::Config => "config",
            ErrorStage::Logging => "logging",
            ErrorStage::Serialize => "serialize",
            ErrorStage::Io => "io",
        }
    }
}

impl fmt::Display for ErrorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the profiler crate.
/// Timed work never produces one of these: failures raised by the work pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerError {
    pub message: String,
    pub stage: ErrorStage,
    pub context: Option<String>,
    /// Name of the library the underlying failure came from
    pub source: Option<String>,
}

impl ProfilerError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: ErrorStage) -> Self {
        ProfilerError {
            message: message.into(),
            stage,
            context: None,
            source: None,
        }
    }

    /// Fatal wiring error: a runner was built without a receiver.
    pub fn missing_receiver() -> Self {
        ProfilerError::new(
            "No ProfilingReceiver was supplied. Profiler won't work without a receiver",
            ErrorStage::Configuration,
        )
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_configuration(&self) -> bool {
        self.stage == ErrorStage::Configuration
    }
}

impl fmt::Display for ProfilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

// The underlying error is flattened into `message` so the type stays Clone + Serialize.
impl std::error::Error for ProfilerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ProfilerError {
    fn from(err: std::io::Error) -> Self {
        ProfilerError::new(format!("I/O error: {}", err), ErrorStage::Io).with_source("std::io")
    }
}

impl From<toml::de::Error> for ProfilerError {
    fn from(err: toml::de::Error) -> Self {
        ProfilerError::new(format!("Invalid configuration: {}", err), ErrorStage::Config)
            .with_source("toml")
    }
}

impl From<serde_json::Error> for ProfilerError {
    fn from(err: serde_json::Error) -> Self {
        ProfilerError::new(format!("JSON error: {}", err), ErrorStage::Serialize)
            .with_source("serde_json")
    }
}
