//! Tests for snapshot capture and comparison.
mod common;
use common::*;
use tortuga::prelude::*;

fn productive_area(id: &str, name: &str, percent: f64) -> Area {
    area_with_activity(id, name, percent / 100.0 * 420.0, 1, ActivityType::Productive)
}

#[test]
fn test_improved_productivity() {
    let base = vec![productive_area("v1", "Ventas", 60.0)];
    let current = vec![productive_area("v1", "Ventas", 75.0)];
    let rows = compare_snapshots(&base, &current);

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.area_name, "Ventas");
    assert_close(row.productive_percent_base, 60.0);
    assert_close(row.productive_percent_current, 75.0);
    assert_close(row.productive_delta, 15.0);
    assert_eq!(row.dead_delta, 0.0);
    assert!(row.improved);
    assert!(!row.worsened);
    assert_eq!(row.trend(), Trend::Improved);
}

#[test]
fn test_worsened_and_mixed_trends() {
    let base = vec![
        area_with_activity("1", "Calidad", 42.0, 1, ActivityType::DeadTime),
        standard_area("2", "Producción")
            .with_position(
                Position::new("p", "Operario", 1)
                    .with_activity(Activity::new("x1", "Ensamble", 200.0, 1, ActivityType::Productive))
                    .with_activity(Activity::new("x2", "Espera", 20.0, 1, ActivityType::DeadTime)),
            ),
    ];
    let current = vec![
        area_with_activity("1", "Calidad", 84.0, 1, ActivityType::DeadTime),
        standard_area("2", "Producción")
            .with_position(
                Position::new("p", "Operario", 1)
                    .with_activity(Activity::new("x1", "Ensamble", 250.0, 1, ActivityType::Productive))
                    .with_activity(Activity::new("x2", "Espera", 40.0, 1, ActivityType::DeadTime)),
            ),
    ];
    let rows = compare_snapshots(&base, &current);

    assert_eq!(rows[0].trend(), Trend::Worsened);
    assert_close(rows[0].dead_delta, 10.0);

    assert!(rows[1].improved && rows[1].worsened);
    assert_eq!(rows[1].trend(), Trend::Mixed);
}

#[test]
fn test_unchanged_area() {
    let areas = vec![ventas_area()];
    let rows = compare_snapshots(&areas, &areas);
    assert_eq!(rows[0].trend(), Trend::Unchanged);
    assert_eq!(rows[0].productive_delta, 0.0);
}

#[test]
fn test_matching_is_by_name_not_id() {
    let base = vec![productive_area("old-id", "Ventas", 50.0)];
    let current = vec![productive_area("new-id", "Ventas", 70.0)];
    let rows = compare_snapshots(&base, &current);
    assert_eq!(rows.len(), 1);
    assert_close(rows[0].productive_delta, 20.0);
}

#[test]
fn test_unmatched_areas_are_skipped() {
    let base = vec![
        productive_area("1", "Ventas", 50.0),
        productive_area("2", "Compras", 50.0),
    ];
    let current = vec![
        productive_area("1", "Ventas", 55.0),
        productive_area("3", "Compras y Abastecimiento", 60.0),
    ];

    let rows = compare_snapshots(&base, &current);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].area_name, "Ventas");

    let detailed = compare_snapshots_detailed(&base, &current);
    assert_eq!(detailed.rows, rows);
    assert_eq!(detailed.orphaned_base, vec!["Compras"]);
    assert_eq!(detailed.orphaned_current, vec!["Compras y Abastecimiento"]);
}

#[test]
fn test_first_same_named_area_wins_on_both_sides() {
    let base = vec![
        productive_area("1", "Ventas", 50.0),
        productive_area("2", "Ventas", 10.0),
    ];
    let current = vec![
        productive_area("1", "Ventas", 60.0),
        productive_area("2", "Ventas", 90.0),
    ];
    let rows = compare_snapshots(&base, &current);
    assert_eq!(rows.len(), 1);
    assert_close(rows[0].productive_percent_base, 50.0);
    assert_close(rows[0].productive_percent_current, 60.0);

    let detailed = compare_snapshots_detailed(&base, &current[..1]);
    assert_eq!(detailed.rows.len(), 1);
    assert!(detailed.orphaned_base.is_empty());
}

#[test]
fn test_rows_follow_base_order() {
    let base = vec![
        productive_area("1", "Ventas", 50.0),
        productive_area("2", "Compras", 50.0),
    ];
    let current = vec![
        productive_area("2", "Compras", 40.0),
        productive_area("1", "Ventas", 60.0),
    ];
    let names: Vec<_> = compare_snapshots(&base, &current)
        .into_iter()
        .map(|r| r.area_name)
        .collect();
    assert_eq!(names, vec!["Ventas", "Compras"]);
}

#[test]
fn test_activity_level_deltas() {
    let base_area = standard_area("1", "Compras").with_position(
        Position::new("p1", "Comprador", 1)
            .with_activity(Activity::new("x1", "Cotizar", 30.0, 2, ActivityType::Productive))
            .with_activity(Activity::new("x2", "Nuevo proceso", 0.0, 1, ActivityType::Support))
            .with_activity(Activity::new("x3", "Pausa", 0.0, 0, ActivityType::DeadTime))
            .with_activity(Activity::new("x4", "Eliminada", 10.0, 1, ActivityType::DeadTime)),
    );
    let current_area = standard_area("1", "Compras").with_position(
        Position::new("p1", "Comprador", 1)
            .with_activity(Activity::new("x1", "Cotizar", 30.0, 3, ActivityType::Productive))
            .with_activity(Activity::new("x2", "Nuevo proceso", 15.0, 1, ActivityType::Support))
            .with_activity(Activity::new("x3", "Pausa", 0.0, 0, ActivityType::DeadTime))
            .with_activity(Activity::new("x5", "Agregada", 10.0, 1, ActivityType::Support)),
    );

    let deltas = compare_activities(&[base_area], &[current_area]);
    let ids: Vec<_> = deltas.iter().map(|d| d.activity_id.as_str()).collect();
    assert_eq!(ids, vec!["x1", "x2", "x3"]);

    assert_eq!(deltas[0].base_minutes, 60.0);
    assert_eq!(deltas[0].current_minutes, 90.0);
    assert_eq!(deltas[0].minutes_delta, 30.0);
    assert_eq!(deltas[0].percent_change, PercentChange::Finite(50.0));

    assert_eq!(deltas[1].percent_change, PercentChange::New);
    assert_eq!(deltas[1].percent_change.as_finite(), None);

    assert_eq!(deltas[2].percent_change, PercentChange::Finite(0.0));
}

#[test]
fn test_activity_matching_requires_same_position() {
    let base = vec![standard_area("1", "Ventas").with_position(
        Position::new("p1", "Vendedor", 1)
            .with_activity(Activity::new("x1", "Visitas", 30.0, 2, ActivityType::Productive)),
    )];
    let current = vec![standard_area("1", "Ventas").with_position(
        Position::new("p2", "Vendedor senior", 1)
            .with_activity(Activity::new("x1", "Visitas", 30.0, 4, ActivityType::Productive)),
    )];
    assert!(compare_activities(&base, &current).is_empty());
}

#[test]
fn test_percent_change_decrease() {
    assert_eq!(PercentChange::between(40.0, 10.0), PercentChange::Finite(-75.0));
    assert_eq!(PercentChange::between(40.0, 0.0), PercentChange::Finite(-100.0));
}

#[test]
fn test_snapshot_is_isolated_from_live_edits() {
    let mut live = vec![ventas_area()];
    let snapshot = GlobalMeasurement::capture(
        "m1",
        "Marzo",
        "2024-03-31",
        "2024-03-31T20:00:00Z",
        &live,
    );
    let before = compute_area_totals(&snapshot.areas()[0]);

    live[0].area_name = "Ventas Nacionales".to_string();
    live[0].positions[0].activities[0].frequency = 8;
    live[0].positions.clear();

    assert_eq!(snapshot.areas()[0].area_name, "Ventas");
    assert_eq!(compute_area_totals(&snapshot.areas()[0]), before);
    assert!(snapshot.area_by_name("Ventas").is_some());
    assert_eq!(snapshot.name(), "Marzo");
}

#[test]
fn test_compare_measurements() {
    let base_areas = vec![productive_area("1", "Ventas", 60.0)];
    let current_areas = vec![productive_area("1", "Ventas", 45.0)];
    let base = GlobalMeasurement::capture("m1", "Q1", "2024-03-31", "2024-03-31", &base_areas);
    let current = GlobalMeasurement::capture("m2", "Q2", "2024-06-30", "2024-06-30", &current_areas);

    let rows = compare_measurements(&base, &current);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trend(), Trend::Worsened);
    assert_close(rows[0].productive_delta, -15.0);
}
