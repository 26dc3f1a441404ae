use tracing::Level;

use crate::config::ProfilerConfig;
use crate::record::ProfilingRecord;
use super::ProfilingReceiver;

/// Emits one structured tracing event per record
#[derive(Debug, Clone, Copy)]
pub struct TracingReceiver {
    level: Level,
}

impl TracingReceiver {
    pub fn new(level: Level) -> Self {
        TracingReceiver { level }
    }

    /// Use the configured `log_level`, falling back to `info` if it doesn't parse.
    pub fn from_config(config: &ProfilerConfig) -> Self {
        let level = config.log_level.parse::<Level>().unwrap_or_else(|_| {
            tracing::warn!(log_level = %config.log_level, "Unknown profiler log level, using info");
            Level::INFO
        });
        Self::new(level)
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingReceiver {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

// `tracing` needs the level at the macro call site, hence one call per level.
macro_rules! emit {
    ($mac:ident, $record:ident) => {
        tracing::$mac!(
            target: "profiling",
            tag = %$record.tag,
            duration_ms = $record.duration_ms(),
            duration_us = $record.duration_us(),
            file = %$record.source_file,
            line = $record.source_line,
            "Profiled block finished"
        )
    };
}

impl ProfilingReceiver for TracingReceiver {
    fn on_information_received(&self, record: ProfilingRecord) {
        if self.level == Level::TRACE {
            emit!(trace, record);
        } else if self.level == Level::DEBUG {
            emit!(debug, record);
        } else if self.level == Level::INFO {
            emit!(info, record);
        } else if self.level == Level::WARN {
            emit!(warn, record);
        } else {
            emit!(error, record);
        }
    }
}
