use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::time::Instant;
use tortuga::prelude::*;
use tracing_subscriber::EnvFilter;

/// Output rendering for every subcommand.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Dead-time analysis over Turtle process areas
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// How results are printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log engine internals to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Organization metrics, or the breakdown of a single area
    Metrics {
        /// Path to the dataset JSON file
        dataset: String,
        /// Optional JSON file overriding the classification thresholds
        #[arg(long)]
        config: Option<String>,
        /// Show position and dead-time cause breakdown for this area id
        #[arg(long)]
        area: Option<String>,
    },
    /// Supplies-to interactions between areas
    Interactions {
        dataset: String,
        /// Use the label index instead of pairwise matching
        #[arg(long)]
        indexed: bool,
    },
    /// The SIPOC matrix of every area with a Turtle process
    Sipoc { dataset: String },
    /// Compare two captures area by area
    Compare {
        /// Dataset holding the earlier capture
        base: String,
        /// Dataset holding the later capture
        current: String,
        /// Use this measurement (id or name) of the base dataset instead of its live areas
        #[arg(long)]
        base_measurement: Option<String>,
        /// Use this measurement (id or name) of the current dataset instead of its live areas
        #[arg(long)]
        current_measurement: Option<String>,
        /// Report activity-level deltas
        #[arg(long)]
        activities: bool,
        /// Also list areas present on only one side
        #[arg(long)]
        orphans: bool,
    },
    /// Capture the dataset's areas into a binary measurement archive
    Snapshot {
        dataset: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        created_at: String,
        /// Archive file to write
        #[arg(short, long)]
        out: String,
        /// Add to an existing archive instead of replacing it
        #[arg(long)]
        append: bool,
    },
    /// List the measurements stored in an archive
    Inspect { archive: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start = Instant::now();
    match cli.command {
        Command::Metrics {
            dataset,
            config,
            area,
        } => run_metrics(&dataset, config.as_deref(), area.as_deref(), cli.format),
        Command::Interactions { dataset, indexed } => {
            run_interactions(&dataset, indexed, cli.format)
        }
        Command::Sipoc { dataset } => run_sipoc(&dataset, cli.format),
        Command::Compare {
            base,
            current,
            base_measurement,
            current_measurement,
            activities,
            orphans,
        } => {
            let base_areas = resolve_areas(&base, base_measurement.as_deref());
            let current_areas = resolve_areas(&current, current_measurement.as_deref());
            run_compare(&base_areas, &current_areas, activities, orphans, cli.format)
        }
        Command::Snapshot {
            dataset,
            id,
            name,
            date,
            created_at,
            out,
            append,
        } => {
            let dataset = load_dataset(&dataset);
            let measurement =
                GlobalMeasurement::capture(id, name, date, created_at, &dataset.areas);
            let mut archive = if append && std::path::Path::new(&out).exists() {
                MeasurementArchive::from_file(&out).unwrap_or_else(|e| {
                    exit_with_error(&format!("Failed to read archive '{}': {}", out, e))
                })
            } else {
                MeasurementArchive::default()
            };
            archive.push(measurement);
            archive
                .save(&out)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write archive: {}", e)));
            println!(
                "Archive '{}' now holds {} measurements",
                out,
                archive.measurements.len()
            );
        }
        Command::Inspect { archive } => {
            let archive = MeasurementArchive::from_file(&archive)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read archive: {}", e)));
            print_inspect(&archive, cli.format);
        }
    }
    log::debug!("Finished in {:?}", start.elapsed());
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dataset(path: &str) -> Dataset {
    Dataset::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn resolve_areas(path: &str, measurement: Option<&str>) -> Vec<Area> {
    let dataset = load_dataset(path);
    match measurement {
        Some(key) => dataset
            .measurement(key)
            .map(|m| m.areas().to_vec())
            .unwrap_or_else(|| {
                exit_with_error(&format!("Measurement '{}' not found in '{}'", key, path))
            }),
        None => dataset.areas,
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));
    println!("{}", json);
}

fn run_metrics(path: &str, config: Option<&str>, area_id: Option<&str>, format: OutputFormat) {
    let dataset = load_dataset(path);
    let config = match config {
        Some(config_path) => MetricsConfig::from_file(config_path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => MetricsConfig::default(),
    };

    if let Some(area_id) = area_id {
        let area = dataset
            .areas
            .iter()
            .find(|a| a.id == area_id)
            .unwrap_or_else(|| exit_with_error(&format!("Area '{}' not found", area_id)));
        let totals = compute_area_totals(area);
        let positions = compute_position_breakdown(area);
        let causes = dead_time_by_cause(area);
        match format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "areaId": area.id,
                "areaName": area.area_name,
                "totals": totals,
                "positions": positions,
                "deadTimeCauses": causes,
            })),
            OutputFormat::Text => {
                println!("--- {} ---", area.area_name);
                print_totals(&totals);
                println!("\nPositions:");
                for p in &positions {
                    println!(
                        "  {:<24} x{:<3} productive {:>6.2}%  support {:>6.2}%  dead {:>6.2}%  unassigned {:>8.1} min",
                        p.position_name,
                        p.count,
                        p.totals.productive_percent,
                        p.totals.support_percent,
                        p.totals.dead_percent,
                        p.totals.unassigned_minutes
                    );
                }
                println!("\nDead-time causes:");
                for c in &causes {
                    println!(
                        "  {:<32} {:>8.1} min  {:>6.2}%",
                        c.cause.as_deref().unwrap_or("(unspecified)"),
                        c.minutes,
                        c.percent_of_dead
                    );
                }
            }
        }
        return;
    }

    let metrics = compute_organization_metrics_with(&dataset.areas, &config);
    match format {
        OutputFormat::Json => print_json(&metrics),
        OutputFormat::Text => {
            println!("--- Organization Summary ({} areas) ---", metrics.area_count);
            println!("Average productive: {:>6.2}%", metrics.average_productive_percent);
            println!("Average support:    {:>6.2}%", metrics.average_support_percent);
            println!("Average dead time:  {:>6.2}%", metrics.average_dead_percent);
            println!(
                "Efficient areas (>= {}% productive): {}",
                config.efficient_productive_percent, metrics.efficient_area_count
            );
            println!(
                "Critical areas (>= {}% dead time):   {}",
                config.critical_dead_percent, metrics.critical_area_count
            );
            if let Some(best) = &metrics.best_area {
                println!(
                    "Best area:  {} ({:.2}% productive)",
                    best.area_name, best.totals.productive_percent
                );
            }
            if let Some(worst) = &metrics.worst_area {
                println!(
                    "Worst area: {} ({:.2}% dead time)",
                    worst.area_name, worst.totals.dead_percent
                );
            }
            println!("\n--- Ranking ---");
            for (rank, score) in metrics.ranking.iter().enumerate() {
                println!(
                    "{:>3}. {:<24} productive {:>6.2}%  dead {:>6.2}%",
                    rank + 1,
                    score.area_name,
                    score.totals.productive_percent,
                    score.totals.dead_percent
                );
            }
        }
    }
}

fn print_totals(totals: &TimeTotals) {
    println!("Available:   {:>8.1} min", totals.available_minutes);
    println!("Assigned:    {:>8.1} min", totals.total_assigned_minutes);
    println!(
        "Productive:  {:>8.1} min  {:>6.2}%",
        totals.productive_minutes, totals.productive_percent
    );
    println!(
        "Support:     {:>8.1} min  {:>6.2}%",
        totals.support_minutes, totals.support_percent
    );
    println!(
        "Dead time:   {:>8.1} min  {:>6.2}%",
        totals.dead_minutes, totals.dead_percent
    );
    println!(
        "Unassigned:  {:>8.1} min  {:>6.2}%",
        totals.unassigned_minutes, totals.unassigned_percent
    );
    if totals.is_over_allocated() {
        println!("  -> Over-allocated: assigned time exceeds available time");
    }
}

fn run_interactions(path: &str, indexed: bool, format: OutputFormat) {
    let dataset = load_dataset(path);
    let interactions = if indexed {
        InteractionIndex::new(&dataset.areas).interactions()
    } else {
        detect_interactions(&dataset.areas)
    };
    match format {
        OutputFormat::Json => print_json(&interactions),
        OutputFormat::Text => {
            if interactions.is_empty() {
                println!("No interactions found");
            }
            for interaction in &interactions {
                println!(
                    "{} -> {}: {}",
                    interaction.source,
                    interaction.target,
                    interaction.items.join(", ")
                );
            }
        }
    }
}

fn run_sipoc(path: &str, format: OutputFormat) {
    let dataset = load_dataset(path);
    let matrix = build_sipoc_matrix(&dataset.areas);
    match format {
        OutputFormat::Json => print_json(&matrix),
        OutputFormat::Text => {
            for row in &matrix {
                println!("--- {} ---", row.area_name);
                println!("  Suppliers: {}", row.suppliers.join(", "));
                println!("  Inputs:    {}", row.inputs.join(", "));
                println!("  Process:   {}", row.methods.join(", "));
                println!("  Outputs:   {}", row.outputs.join(", "));
                println!("  Customers: {}", row.customers.join(", "));
            }
        }
    }
}

fn run_compare(
    base: &[Area],
    current: &[Area],
    activities: bool,
    orphans: bool,
    format: OutputFormat,
) {
    if activities {
        let deltas = compare_activities(base, current);
        match format {
            OutputFormat::Json => print_json(&deltas),
            OutputFormat::Text => {
                for d in &deltas {
                    let change = match d.percent_change {
                        PercentChange::Finite(value) => format!("{:+.2}%", value),
                        PercentChange::New => "new".to_string(),
                    };
                    println!(
                        "{:<20} {:<24} {:>8.1} -> {:>8.1} min ({:+.1}, {})",
                        d.area_name,
                        d.activity_name,
                        d.base_minutes,
                        d.current_minutes,
                        d.minutes_delta,
                        change
                    );
                }
            }
        }
        return;
    }

    let comparison = if orphans {
        compare_snapshots_detailed(base, current)
    } else {
        SnapshotComparison {
            rows: compare_snapshots(base, current),
            orphaned_base: Vec::new(),
            orphaned_current: Vec::new(),
        }
    };

    match format {
        OutputFormat::Json if orphans => print_json(&comparison),
        OutputFormat::Json => print_json(&comparison.rows),
        OutputFormat::Text => {
            for row in &comparison.rows {
                println!(
                    "{:<24} productive {:>6.2}% -> {:>6.2}% ({:+.2})  dead {:>6.2}% -> {:>6.2}% ({:+.2})  {:?}",
                    row.area_name,
                    row.productive_percent_base,
                    row.productive_percent_current,
                    row.productive_delta,
                    row.dead_percent_base,
                    row.dead_percent_current,
                    row.dead_delta,
                    row.trend()
                );
            }
            if orphans {
                println!("\nOnly in base:    {}", comparison.orphaned_base.join(", "));
                println!("Only in current: {}", comparison.orphaned_current.join(", "));
            }
        }
    }
}

fn print_inspect(archive: &MeasurementArchive, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let summary: Vec<_> = archive
                .measurements
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "id": m.id(),
                        "name": m.name(),
                        "date": m.date(),
                        "createdAt": m.created_at(),
                        "areaCount": m.areas().len(),
                    })
                })
                .collect();
            print_json(&summary);
        }
        OutputFormat::Text => {
            for m in &archive.measurements {
                println!(
                    "{:<12} {:<24} {:<12} {} ({} areas)",
                    m.id(),
                    m.name(),
                    m.date(),
                    m.created_at(),
                    m.areas().len()
                );
            }
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
