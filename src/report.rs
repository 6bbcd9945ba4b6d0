//! Throughput Report Module
//!
//! Serializable summary of a benchmark run, suitable for saving as JSON and
//! comparing across frameworks and vendors.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Throughput figures for one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputReport {
    /// Execution-path label ("Model Forward(<framework>)" or
    /// "Vendor Inference(<vendor>)")
    pub label: String,

    /// Total images processed: repeat * batches_per_pass * batch_size
    pub images: usize,

    /// Wall-clock duration of the whole run in seconds
    pub wall_seconds: f64,

    /// Accumulated core duration (prediction step only) in seconds
    pub core_seconds: f64,

    /// Images per second against wall-clock time
    pub ips: f64,

    /// Images per second against core time
    pub core_ips: f64,

    /// Timestamp of when the run finished
    pub timestamp: String,
}

impl ThroughputReport {
    /// Build a report from raw timing data.
    ///
    /// Zero durations yield 0.0 throughput rather than a division by zero.
    pub fn new(label: String, images: usize, wall: Duration, core: Duration) -> Self {
        let wall_seconds = wall.as_secs_f64();
        let core_seconds = core.as_secs_f64();

        let ips = if wall_seconds > 0.0 {
            images as f64 / wall_seconds
        } else {
            0.0
        };
        let core_ips = if core_seconds > 0.0 {
            images as f64 / core_seconds
        } else {
            0.0
        };

        Self {
            label,
            images,
            wall_seconds,
            core_seconds,
            ips,
            core_ips,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Save the report to a JSON file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.1} ips (wall), {:.1} ips (core) over {} images",
            self.label, self.ips, self.core_ips, self.images
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_arithmetic() {
        let report = ThroughputReport::new(
            "Model Forward(test)".to_string(),
            100,
            Duration::from_secs(2),
            Duration::from_secs(1),
        );
        assert_eq!(report.ips, 50.0);
        assert_eq!(report.core_ips, 100.0);
        assert!(report.core_seconds <= report.wall_seconds);
    }

    #[test]
    fn test_zero_duration_yields_zero_throughput() {
        let report = ThroughputReport::new(
            "Model Forward(test)".to_string(),
            0,
            Duration::ZERO,
            Duration::ZERO,
        );
        assert_eq!(report.ips, 0.0);
        assert_eq!(report.core_ips, 0.0);
    }

    #[test]
    fn test_roundtrip_json() {
        let report = ThroughputReport::new(
            "Vendor Inference(ref)".to_string(),
            64,
            Duration::from_millis(500),
            Duration::from_millis(250),
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: ThroughputReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.images, 64);
        assert_eq!(back.label, report.label);
    }
}
