//! Configuration loaded from environment variables

use tracing::warn;

use crate::decoder::CaptureSource;
use crate::output::OutputFormat;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Capture input: a file path, or stdin
    pub input: CaptureSource,

    /// Record output format
    pub output_format: OutputFormat,

    /// Depth of the reader → decoder channel
    pub channel_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            input: lookup("CAPTURE_INPUT")
                .map(|s| CaptureSource::from_arg(s.trim()))
                .unwrap_or(CaptureSource::Stdin),

            output_format: lookup("OUTPUT_FORMAT")
                .and_then(|s| match s.parse() {
                    Ok(format) => Some(format),
                    Err(e) => {
                        warn!("{}, using kv", e);
                        None
                    }
                })
                .unwrap_or_default(),

            channel_capacity: lookup("CHANNEL_CAPACITY")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(256),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.input, CaptureSource::Stdin);
        assert_eq!(config.output_format, OutputFormat::Kv);
        assert_eq!(config.channel_capacity, 256);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CAPTURE_INPUT", "captures.txt"),
            ("OUTPUT_FORMAT", "csv"),
            ("CHANNEL_CAPACITY", "16"),
        ]);
        assert_eq!(config.input, CaptureSource::File(PathBuf::from("captures.txt")));
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert_eq!(config.channel_capacity, 16);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[("OUTPUT_FORMAT", "xml"), ("CHANNEL_CAPACITY", "0")]);
        assert_eq!(config.output_format, OutputFormat::Kv);
        assert_eq!(config.channel_capacity, 256);
    }
}
