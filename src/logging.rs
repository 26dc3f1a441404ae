use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::get_config;
use crate::error::{ErrorStage, ProfilerError};

/// Install a JSON tracing subscriber for hosts that don't set up tracing themselves.
///
/// `RUST_LOG` wins when set; otherwise the configured `log_level` is used, so
/// `TracingReceiver` output (target `profiling`) shows up at the same level it is emitted at.
pub fn init_logging() -> Result<(), ProfilerError> {
    init_logging_with(&get_config().log_level)
}

/// Like [`init_logging`] with an explicit fallback filter directive.
pub fn init_logging_with(default_directive: &str) -> Result<(), ProfilerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive).map_err(|e| {
            ProfilerError::new(format!("Invalid log filter: {}", e), ErrorStage::Logging)
                .with_context(default_directive.to_string())
                .with_source("tracing_subscriber")
        })?,
    };

    let profiling_events = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json();

    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(filter).with(profiling_events))
        .map_err(|e| {
            ProfilerError::new(
                format!("Failed to set global tracing subscriber: {}", e),
                ErrorStage::Logging,
            )
        })?;

    tracing::info!(filter = default_directive, "Profiler logging initialized");
    Ok(())
}
