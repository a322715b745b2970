//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! tortuga crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use tortuga::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let dataset = Dataset::from_file("path/to/areas.json")?;
//!
//! let metrics = compute_organization_metrics(&dataset.areas);
//! println!("Efficient areas: {}", metrics.efficient_area_count);
//!
//! for row in build_sipoc_matrix(&dataset.areas) {
//!     println!("{}: suppliers {:?}, customers {:?}", row.area_name, row.suppliers, row.customers);
//! }
//! # Ok(())
//! # }
//! ```

// Data model
pub use crate::model::{Activity, ActivityType, Area, GlobalMeasurement, Position, TurtleProcess};

// Aggregation
pub use crate::aggregation::{
    AreaScore, CauseShare, OrganizationMetrics, PositionTotals, TimeTotals, compute_area_totals,
    compute_organization_metrics, compute_organization_metrics_with, compute_position_breakdown,
    compute_position_totals, dead_time_by_cause,
};

// Process interactions
pub use crate::interaction::{Interaction, InteractionIndex, detect_interactions};
pub use crate::sipoc::{SipocRow, build_sipoc_matrix, sipoc_row};

// Comparison
pub use crate::comparison::{
    ActivityDelta, ComparisonRow, PercentChange, SnapshotComparison, Trend, compare_activities,
    compare_measurements, compare_snapshots, compare_snapshots_detailed,
};

// Configuration and data loading
pub use crate::config::MetricsConfig;
pub use crate::data::{Dataset, MeasurementArchive, validate_area, validate_areas};

// Error types
pub use crate::error::{ArchiveError, DatasetError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
