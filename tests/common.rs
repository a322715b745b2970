//! Common test utilities for building areas and datasets.
use tortuga::prelude::*;

/// Absolute tolerance used for percentage comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-2;

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} to be within {} of {}",
        actual,
        EPSILON,
        expected
    );
}

/// An area with a standard 480/60 workday and no positions.
#[allow(dead_code)]
pub fn standard_area(id: &str, name: &str) -> Area {
    Area::new(id, name).with_workday(480.0, 60.0)
}

/// An area whose single position holds one activity of the given type.
#[allow(dead_code)]
pub fn area_with_activity(
    id: &str,
    name: &str,
    time_minutes: f64,
    frequency: u32,
    activity_type: ActivityType,
) -> Area {
    standard_area(id, name).with_position(
        Position::new(format!("{}-p1", id), "Operario", 1).with_activity(Activity::new(
            format!("{}-a1", id),
            "Actividad",
            time_minutes,
            frequency,
            activity_type,
        )),
    )
}

/// An area with a Turtle process declaring the given inputs and outputs.
#[allow(dead_code)]
pub fn process_area(id: &str, name: &str, inputs: &[&str], outputs: &[&str]) -> Area {
    standard_area(id, name).with_turtle_process(
        TurtleProcess::default()
            .with_inputs(inputs.iter().copied())
            .with_outputs(outputs.iter().copied())
            .with_methods(["Procedimiento"]),
    )
}

/// A small supply chain: Compras -> Almacén -> Producción -> Ventas, plus an
/// area without a process declaration.
#[allow(dead_code)]
pub fn supply_chain() -> Vec<Area> {
    vec![
        process_area("1", "Compras", &["Requisición"], &["Orden de compra"]),
        process_area(
            "2",
            "Almacén",
            &["Orden de compra", "Producto terminado"],
            &["Materia prima", "Requisición"],
        ),
        process_area(
            "3",
            "Producción",
            &["Materia prima"],
            &["Producto terminado"],
        ),
        process_area("4", "Ventas", &["Producto terminado"], &["Factura"]),
        standard_area("5", "Finanzas"),
    ]
}

/// A mixed area used for aggregation tests.
///
/// Two positions: "Vendedor" (count 2) with 240 productive and 60 support
/// minutes, "Asistente" (count 1) with 60 dead minutes caused by waiting.
#[allow(dead_code)]
pub fn ventas_area() -> Area {
    standard_area("v1", "Ventas")
        .with_position(
            Position::new("pos-vendedor", "Vendedor", 2)
                .with_activity(Activity::new(
                    "act-visitas",
                    "Visitas",
                    60.0,
                    4,
                    ActivityType::Productive,
                ))
                .with_activity(Activity::new(
                    "act-reportes",
                    "Reportes",
                    30.0,
                    2,
                    ActivityType::Support,
                )),
        )
        .with_position(
            Position::new("pos-asistente", "Asistente", 1).with_activity(
                Activity::new("act-espera", "Espera", 20.0, 3, ActivityType::DeadTime)
                    .with_cause("Esperar aprobación"),
            ),
        )
}

#[allow(dead_code)]
pub const DATASET_JSON: &str = r#"{
  "areas": [
    {
      "id": "a1",
      "areaName": "Compras",
      "managerName": "Laura",
      "date": "2024-03-01",
      "workdayMinutes": 480,
      "fixedBreaksMinutes": 60,
      "companyId": "c1",
      "positions": [
        {
          "id": "p1",
          "name": "Comprador",
          "count": 2,
          "activities": [
            { "id": "x1", "name": "Cotizar", "timeMinutes": 60, "frequency": 2, "type": "productive" },
            { "id": "x2", "name": "Esperar firma", "timeMinutes": 30, "frequency": 1, "type": "dead_time", "cause": "Firma pendiente" }
          ]
        }
      ],
      "turtleProcess": {
        "inputs": ["Requisición"],
        "outputs": ["Orden de compra"],
        "methods": ["Procedimiento de compras"]
      }
    },
    {
      "id": "a2",
      "areaName": "Almacén",
      "workdayMinutes": 480,
      "fixedBreaksMinutes": 60,
      "positions": [],
      "turtleProcess": { "inputs": ["Orden de compra"], "outputs": ["Requisición"] }
    }
  ],
  "measurements": [
    {
      "id": "m1",
      "name": "Enero",
      "date": "2024-01-31",
      "createdAt": "2024-01-31T18:00:00Z",
      "areas": [
        {
          "id": "a1",
          "areaName": "Compras",
          "workdayMinutes": 480,
          "fixedBreaksMinutes": 60,
          "positions": [
            {
              "id": "p1",
              "name": "Comprador",
              "count": 2,
              "activities": [
                { "id": "x1", "name": "Cotizar", "timeMinutes": 60, "frequency": 1, "type": "productive" },
                { "id": "x2", "name": "Esperar firma", "timeMinutes": 30, "frequency": 3, "type": "dead_time" }
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;
