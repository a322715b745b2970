use super::validate_areas;
use crate::error::DatasetError;
use crate::model::{Area, GlobalMeasurement};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;

/// Areas and measurements as handed over by the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dataset {
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub measurements: Vec<GlobalMeasurement>,
}

impl Dataset {
    /// Loads and validates a dataset from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates a dataset from JSON text.
    ///
    /// Accepts either `{ "areas": [...], "measurements": [...] }` or a bare
    /// list of areas. Unknown top-level keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let parse_error = |e: serde_json::Error| DatasetError::Parse(e.to_string());
        // Shape first, then a typed parse of the matching branch.
        let dataset = match serde_json::from_str::<Value>(json).map_err(parse_error)? {
            Value::Array(_) => Dataset {
                areas: serde_json::from_str(json).map_err(parse_error)?,
                measurements: Vec::new(),
            },
            Value::Object(_) => serde_json::from_str(json).map_err(parse_error)?,
            other => {
                return Err(DatasetError::Parse(format!(
                    "expected a dataset object or a list of areas, found {}",
                    other
                )));
            }
        };

        validate_areas(&dataset.areas)?;
        for measurement in &dataset.measurements {
            validate_areas(measurement.areas())?;
        }
        log::debug!(
            "Loaded dataset with {} areas and {} measurements",
            dataset.areas.len(),
            dataset.measurements.len()
        );
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> Result<String, DatasetError> {
        serde_json::to_string_pretty(self).map_err(|e| DatasetError::Serialize(e.to_string()))
    }

    /// Finds a measurement by id, falling back to an exact name match.
    pub fn measurement(&self, key: &str) -> Option<&GlobalMeasurement> {
        self.measurements
            .iter()
            .find(|m| m.id() == key)
            .or_else(|| self.measurements.iter().find(|m| m.name() == key))
    }
}
