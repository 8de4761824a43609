use crate::error::ProcessorError;
use serde::Deserialize;
use std::path::Path;

/// Default size of each event broadcast channel.
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 100;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Route history sync notifications to their handler. When off they are still
    /// recognised and emitted, just not handled.
    pub process_history_sync: bool,
    pub event_channel_capacity: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            process_history_sync: true,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}

impl ProcessorConfig {
    /// Loads a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProcessorError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        if config.event_channel_capacity == 0 {
            return Err(ProcessorError::Config(
                "event_channel_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"process_history_sync": false}}"#).unwrap();

        let config = ProcessorConfig::from_file(file.path()).unwrap();
        assert!(!config.process_history_sync);
        assert_eq!(config.event_channel_capacity, DEFAULT_EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"event_channel_capacity": 0}}"#).unwrap();

        assert!(matches!(
            ProcessorConfig::from_file(file.path()),
            Err(ProcessorError::Config(_))
        ));
    }
}
