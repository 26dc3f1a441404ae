#[cfg(test)]
mod tests {
    use crate::error::{ErrorStage, ProfilerError};

    #[test]
    fn test_error_creation() {
        let error = ProfilerError::new("Test error", ErrorStage::Io);
        assert_eq!(error.message, "Test error");
        assert_eq!(error.stage, ErrorStage::Io);
        assert!(error.context.is_none());
        assert!(error.source.is_none());
    }

    #[test]
    fn test_error_with_context() {
        let error = ProfilerError::new("Test error", ErrorStage::Io)
            .with_context("Additional context");
        assert_eq!(error.context.as_deref(), Some("Additional context"));
    }

    #[test]
    fn test_error_display() {
        let error = ProfilerError::new("Test error", ErrorStage::Io)
            .with_context("context")
            .with_source("source");
        let display = format!("{}", error);
        assert_eq!(display, "[io] Test error (context: context) (source: source)");
    }

    #[test]
    fn test_missing_receiver_is_configuration_error() {
        let error = ProfilerError::missing_receiver();
        assert!(error.is_configuration());
        assert!(error.message.contains("ProfilingReceiver"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = ProfilerError::from(io);
        assert_eq!(error.stage, ErrorStage::Io);
        assert_eq!(error.source.as_deref(), Some("std::io"));
        assert!(error.message.contains("gone"));
    }

    #[test]
    fn test_from_toml_error() {
        let err = toml::from_str::<crate::config::ProfilerConfig>("enabled = ").unwrap_err();
        let error = ProfilerError::from(err);
        assert_eq!(error.stage, ErrorStage::Config);
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<crate::record::ProfilingRecord>("{").unwrap_err();
        let error = ProfilerError::from(err);
        assert_eq!(error.stage, ErrorStage::Serialize);
        assert_eq!(error.source.as_deref(), Some("serde_json"));
    }

    #[test]
    fn test_stage_serializes_as_snake_case() {
        let error = ProfilerError::missing_receiver();
        let value = serde_json::to_value(&error).expect("serializable");
        assert_eq!(value["stage"], "configuration");
        assert!(std::error::Error::source(&error).is_none());
    }
}
