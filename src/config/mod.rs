pub mod profiler;

pub use profiler::{get_config, ProfilerConfig, CONFIG_PATH_ENV, ENABLED_ENV};
