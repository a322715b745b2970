use super::Area;
use serde::{Deserialize, Serialize};

/// A named, immutable snapshot of every area at a point in time.
///
/// The areas are deep copies taken at capture time. There is no mutable
/// access to a measurement once it exists, so later edits to live areas can
/// never leak into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalMeasurement {
    id: String,
    name: String,
    date: String,
    created_at: String,
    areas: Vec<Area>,
}

impl GlobalMeasurement {
    /// Captures a snapshot by cloning `areas`.
    pub fn capture(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        created_at: impl Into<String>,
        areas: &[Area],
    ) -> Self {
        let measurement = Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            created_at: created_at.into(),
            areas: areas.to_vec(),
        };
        log::debug!(
            "Captured measurement '{}' with {} areas",
            measurement.name,
            measurement.areas.len()
        );
        measurement
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Looks up a captured area by its exact name.
    pub fn area_by_name(&self, area_name: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.area_name == area_name)
    }
}
