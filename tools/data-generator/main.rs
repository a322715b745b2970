use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;
use tortuga::data::Dataset;
use tortuga::model::{Activity, ActivityType, Area, GlobalMeasurement, Position, TurtleProcess};

/// A CLI tool to generate sample area datasets for the Tortuga engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_areas.json")]
    output: String,

    /// Number of areas to generate
    #[arg(long, default_value_t = 6)]
    areas: usize,

    /// The minimum number of positions per area
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of positions per area
    #[arg(long, default_value_t = 4)]
    max: usize,

    /// Also capture the generated areas as a measurement with this name
    #[arg(long)]
    measurement: Option<String>,
}

const AREA_NAMES: &[&str] = &[
    "Compras",
    "Almacén",
    "Producción",
    "Calidad",
    "Ventas",
    "Logística",
    "Mantenimiento",
    "Finanzas",
    "Recursos Humanos",
    "Atención al Cliente",
];

const PROCESS_LABELS: &[&str] = &[
    "Orden de compra",
    "Requisición",
    "Materia prima",
    "Producto terminado",
    "Reporte de calidad",
    "Pedido de cliente",
    "Factura",
    "Plan de producción",
    "Orden de mantenimiento",
    "Nómina",
];

const METHODS: &[&str] = &["Procedimiento estándar", "Checklist diario", "Kanban", "5S"];

const DEAD_TIME_CAUSES: &[&str] = &[
    "Esperar aprobación",
    "Falta de material",
    "Retrabajo",
    "Falla de sistema",
    "Búsqueda de información",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    // Add validation to ensure min is not greater than max
    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} areas (positions per area: {} to {})...",
        cli.areas, cli.min, cli.max
    );

    let areas: Vec<Area> = (0..cli.areas)
        .map(|index| generate_area(&mut rng, index, cli.min, cli.max))
        .collect();

    let measurements = match cli.measurement {
        Some(name) => vec![GlobalMeasurement::capture(
            "m1",
            name,
            "2024-01-31",
            "2024-01-31T18:00:00Z",
            &areas,
        )],
        None => Vec::new(),
    };

    let dataset = Dataset {
        areas,
        measurements,
    };

    fs::write(&cli.output, dataset.to_json_pretty()?)?;

    println!(
        "Successfully generated and saved the dataset to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_area(rng: &mut ThreadRng, index: usize, min: usize, max: usize) -> Area {
    let base_name = AREA_NAMES[index % AREA_NAMES.len()];
    let area_name = if index < AREA_NAMES.len() {
        base_name.to_string()
    } else {
        format!("{} {}", base_name, index / AREA_NAMES.len() + 1)
    };

    let mut area = Area::new(format!("area-{}", index + 1), area_name)
        .with_workday(rng.random_range(420..=540) as f64, rng.random_range(30..=90) as f64);
    area.manager_name = format!("Responsable {}", index + 1);
    area.date = "2024-01-31".to_string();

    let position_count = rng.random_range(min..=max);
    for p in 0..position_count {
        let headcount = rng.random_range(1..=5);
        let position = generate_position(rng, &area.id, p, headcount);
        area.positions.push(position);
    }

    // Roughly one area in five has no process declaration yet.
    if rng.random_bool(0.8) {
        area.turtle_process = Some(
            TurtleProcess::default()
                .with_inputs(pick(rng, PROCESS_LABELS, 1, 3))
                .with_outputs(pick(rng, PROCESS_LABELS, 1, 3))
                .with_methods(pick(rng, METHODS, 1, 2)),
        );
    }
    area
}

fn generate_position(rng: &mut ThreadRng, area_id: &str, index: usize, count: u32) -> Position {
    let mut position = Position::new(
        format!("{}-pos-{}", area_id, index + 1),
        format!("Puesto {}", index + 1),
        count,
    );
    for a in 0..rng.random_range(2..=6) {
        let activity_type = match rng.random_range(0..10) {
            0..=5 => ActivityType::Productive,
            6..=7 => ActivityType::Support,
            _ => ActivityType::DeadTime,
        };
        let mut activity = Activity::new(
            format!("{}-act-{}", position.id, a + 1),
            format!("Actividad {}", a + 1),
            rng.random_range(5..=90) as f64,
            rng.random_range(1..=4),
            activity_type,
        );
        if activity_type == ActivityType::DeadTime {
            if let Some(cause) = DEAD_TIME_CAUSES.choose(rng) {
                activity = activity.with_cause(*cause);
            }
        }
        position.activities.push(activity);
    }
    position
}

fn pick(rng: &mut ThreadRng, pool: &[&str], min: usize, max: usize) -> Vec<String> {
    let amount = rng.random_range(min..=max).min(pool.len());
    pool.choose_multiple(rng, amount)
        .map(|label| label.to_string())
        .collect()
}
