//! # Tortuga - Dead-Time Analysis Engine
//!
//! **Tortuga** turns the time allocations recorded for an organization's areas
//! into productivity metrics, and reads the areas' Turtle process declarations
//! to find out which areas supply which. Every computation is a pure function
//! over borrowed data: nothing is cached, nothing is mutated, and the same
//! input always produces the same output.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Build [`model::Area`] values yourself or load them with
//!     [`data::Dataset::from_file`], which also validates them.
//! 2.  **Aggregate**: [`aggregation::compute_area_totals`],
//!     [`aggregation::compute_position_totals`] and
//!     [`aggregation::compute_organization_metrics`] produce minute and percentage
//!     totals at each granularity.
//! 3.  **Map the Process**: [`interaction::detect_interactions`] and
//!     [`sipoc::build_sipoc_matrix`] derive the supplier/customer structure.
//! 4.  **Track Evolution**: capture a [`model::GlobalMeasurement`] and compare it
//!     later with [`comparison::compare_snapshots`] or
//!     [`comparison::compare_activities`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tortuga::prelude::*;
//!
//! let compras = Area::new("a1", "Compras")
//!     .with_workday(480.0, 60.0)
//!     .with_position(
//!         Position::new("p1", "Comprador", 2)
//!             .with_activity(Activity::new("x1", "Cotizar", 60.0, 2, ActivityType::Productive))
//!             .with_activity(
//!                 Activity::new("x2", "Esperar aprobación", 30.0, 1, ActivityType::DeadTime)
//!                     .with_cause("Firma pendiente"),
//!             ),
//!     )
//!     .with_turtle_process(TurtleProcess::default().with_outputs(["Orden de compra"]));
//!
//! let almacen = Area::new("a2", "Almacén")
//!     .with_workday(480.0, 60.0)
//!     .with_turtle_process(TurtleProcess::default().with_inputs(["Orden de compra"]));
//!
//! let areas = vec![compras, almacen];
//!
//! let totals = compute_area_totals(&areas[0]);
//! println!("Productive: {:.2}%", totals.productive_percent);
//!
//! let metrics = compute_organization_metrics(&areas);
//! println!("Average dead time: {:.2}%", metrics.average_dead_percent);
//!
//! for interaction in detect_interactions(&areas) {
//!     println!("{} -> {}: {:?}", interaction.source, interaction.target, interaction.items);
//! }
//!
//! let before = GlobalMeasurement::capture("m1", "Enero", "2024-01-31", "2024-01-31T18:00:00Z", &areas);
//! for row in compare_snapshots(before.areas(), &areas) {
//!     println!("{}: {:?}", row.area_name, row.trend());
//! }
//! ```

pub mod aggregation;
pub mod comparison;
pub mod config;
pub mod data;
pub mod error;
pub mod interaction;
pub mod model;
pub mod prelude;
pub mod sipoc;

#[cfg(feature = "python-bindings")]
mod python;
