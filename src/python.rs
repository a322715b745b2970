use crate::aggregation::{compute_area_totals, compute_organization_metrics_with};
use crate::comparison::{compare_activities, compare_snapshots, compare_snapshots_detailed};
use crate::config::MetricsConfig;
use crate::data::Dataset;
use crate::interaction::detect_interactions;
use crate::model::Area;
use crate::sipoc::build_sipoc_matrix;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

fn load_areas(json: &str) -> PyResult<Vec<Area>> {
    Dataset::from_json(json)
        .map(|dataset| dataset.areas)
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Dead-time analysis over a fixed set of areas.
///
/// The areas are parsed and validated once on construction. Every method
/// returns its result as a JSON string using the same camelCase field names
/// as the input.
#[pyclass(name = "Tortuga")]
struct TortugaPy {
    areas: Vec<Area>,
    config: MetricsConfig,
}

#[pymethods]
impl TortugaPy {
    /// Loads the areas to analyse.
    ///
    /// Args:
    ///     areas_json (str): A JSON array of areas, or an object with an
    ///         "areas" array.
    ///     config_json (str | None): Optional JSON object overriding the
    ///         "efficientProductivePercent" and "criticalDeadPercent" thresholds.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or an area fails validation.
    #[new]
    #[pyo3(signature = (areas_json, config_json=None))]
    fn new(areas_json: &str, config_json: Option<&str>) -> PyResult<Self> {
        let areas = load_areas(areas_json)?;
        let config = match config_json {
            Some(json) => MetricsConfig::from_json(json)
                .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?,
            None => MetricsConfig::default(),
        };
        Ok(TortugaPy { areas, config })
    }

    /// Minute and percentage totals of the area with the given id.
    ///
    /// Raises:
    ///     KeyError: If no area has that id.
    fn area_totals(&self, area_id: &str) -> PyResult<String> {
        let area = self
            .areas
            .iter()
            .find(|a| a.id == area_id)
            .ok_or_else(|| PyErr::new::<PyKeyError, _>(area_id.to_string()))?;
        to_json(&compute_area_totals(area))
    }

    /// Averages, counts, best/worst area and ranking across all areas.
    fn organization_metrics(&self) -> PyResult<String> {
        to_json(&compute_organization_metrics_with(&self.areas, &self.config))
    }

    fn interactions(&self) -> PyResult<String> {
        to_json(&detect_interactions(&self.areas))
    }

    fn sipoc_matrix(&self) -> PyResult<String> {
        to_json(&build_sipoc_matrix(&self.areas))
    }

    /// Compares a base capture (JSON areas) against the loaded areas.
    ///
    /// Args:
    ///     base_json (str): The earlier capture.
    ///     orphans (bool): Also report area names present on only one side.
    ///     activities (bool): Report activity-level deltas instead of area rows.
    #[pyo3(signature = (base_json, orphans=false, activities=false))]
    fn compare(&self, base_json: &str, orphans: bool, activities: bool) -> PyResult<String> {
        let base = load_areas(base_json)?;
        if activities {
            to_json(&compare_activities(&base, &self.areas))
        } else if orphans {
            to_json(&compare_snapshots_detailed(&base, &self.areas))
        } else {
            to_json(&compare_snapshots(&base, &self.areas))
        }
    }
}

/// Time-accounting and process-interaction engine for dead-time analysis.
#[pymodule]
fn tortuga(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TortugaPy>()?;
    Ok(())
}
