//! Benchmark Configuration Module
//!
//! Defines the configuration shared by both measurement harnesses and its
//! validation rules. Configurations are serde-serializable so runs can be
//! driven from JSON files.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Configuration for a forward-pass benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardConfig {
    /// Number of full passes over the data source
    pub repeat: usize,

    /// Log progress every `log_freq` steps (must be >= 1)
    pub log_freq: usize,

    /// Batch size, used for throughput arithmetic only
    pub batch_size: usize,

    /// Framework label reported by the framework-path harness
    pub framework: String,

    /// Vendor label reported by the accelerated-runtime harness
    pub vendor: String,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            repeat: 1,
            log_freq: 30,
            batch_size: 32,
            framework: "native".to_string(),
            vendor: "reference".to_string(),
        }
    }
}

impl ForwardConfig {
    /// Create a quick configuration for smoke tests
    pub fn quick() -> Self {
        Self {
            repeat: 1,
            log_freq: 1,
            batch_size: 4,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// `repeat == 0` is legal and yields an empty accuracy sequence;
    /// `log_freq` and `batch_size` must be at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.log_freq == 0 {
            return Err(BenchError::Config(
                "log_freq must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(BenchError::Config(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ForwardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.repeat, 1);
    }

    #[test]
    fn test_zero_log_freq_rejected() {
        let config = ForwardConfig {
            log_freq: 0,
            ..ForwardConfig::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::Config(_))));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = ForwardConfig {
            batch_size: 0,
            ..ForwardConfig::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::Config(_))));
    }

    #[test]
    fn test_zero_repeat_allowed() {
        let config = ForwardConfig {
            repeat: 0,
            ..ForwardConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_json() {
        let config = ForwardConfig::quick();
        let json = serde_json::to_string(&config).unwrap();
        let back: ForwardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.batch_size, config.batch_size);
        assert_eq!(back.framework, config.framework);
    }
}
