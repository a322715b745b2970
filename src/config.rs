//! Thresholds used to classify areas in organization metrics.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_EFFICIENT_PRODUCTIVE_PERCENT: f64 = 70.0;
pub const DEFAULT_CRITICAL_DEAD_PERCENT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsConfig {
    /// An area is efficient when its productive percent reaches this value.
    pub efficient_productive_percent: f64,
    /// An area is critical when its dead-time percent reaches this value.
    pub critical_dead_percent: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            efficient_productive_percent: DEFAULT_EFFICIENT_PRODUCTIVE_PERCENT,
            critical_dead_percent: DEFAULT_CRITICAL_DEAD_PERCENT,
        }
    }
}

impl MetricsConfig {
    pub fn builder() -> MetricsConfigBuilder {
        MetricsConfigBuilder::default()
    }

    /// Loads a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MetricsConfigBuilder {
    config: MetricsConfig,
}

impl MetricsConfigBuilder {
    pub fn efficient_productive_percent(mut self, percent: f64) -> Self {
        self.config.efficient_productive_percent = percent;
        self
    }

    pub fn critical_dead_percent(mut self, percent: f64) -> Self {
        self.config.critical_dead_percent = percent;
        self
    }

    pub fn build(self) -> MetricsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = MetricsConfig::from_json(r#"{ "criticalDeadPercent": 25 }"#).unwrap();
        assert_eq!(config.critical_dead_percent, 25.0);
        assert_eq!(
            config.efficient_productive_percent,
            DEFAULT_EFFICIENT_PRODUCTIVE_PERCENT
        );
    }

    #[test]
    fn builder_overrides_thresholds() {
        let config = MetricsConfig::builder()
            .efficient_productive_percent(80.0)
            .critical_dead_percent(20.0)
            .build();
        assert_eq!(config.efficient_productive_percent, 80.0);
        assert_eq!(config.critical_dead_percent, 20.0);
    }
}
