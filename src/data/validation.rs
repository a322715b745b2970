use crate::error::ValidationError;
use crate::model::Area;
use ahash::AHashSet;

fn check_minutes(area: &Area, field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidMinutes {
            area_id: area.id.clone(),
            field,
            value,
        })
    }
}

/// Checks an area for data-entry mistakes the computation layer does not guard against.
///
/// A workday shorter than its breaks is accepted: it is a meaningful state
/// that yields zero percentages and negative unassigned time.
pub fn validate_area(area: &Area) -> Result<(), ValidationError> {
    if area.id.is_empty() {
        return Err(ValidationError::EmptyField {
            area_id: area.area_name.clone(),
            field: "id",
        });
    }
    if area.area_name.is_empty() {
        return Err(ValidationError::EmptyField {
            area_id: area.id.clone(),
            field: "area name",
        });
    }
    check_minutes(area, "workday", area.workday_minutes)?;
    check_minutes(area, "fixed breaks", area.fixed_breaks_minutes)?;

    let mut position_ids = AHashSet::new();
    for position in &area.positions {
        if !position_ids.insert(position.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                area_id: area.id.clone(),
                kind: "position",
                id: position.id.clone(),
            });
        }
        if position.count == 0 {
            return Err(ValidationError::ZeroHeadcount {
                area_id: area.id.clone(),
                position_id: position.id.clone(),
            });
        }

        let mut activity_ids = AHashSet::new();
        for activity in &position.activities {
            if !activity_ids.insert(activity.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    area_id: area.id.clone(),
                    kind: "activity",
                    id: activity.id.clone(),
                });
            }
            if !activity.time_minutes.is_finite() || activity.time_minutes < 0.0 {
                return Err(ValidationError::InvalidActivityDuration {
                    position_id: position.id.clone(),
                    activity_id: activity.id.clone(),
                    time_minutes: activity.time_minutes,
                });
            }
        }
    }
    Ok(())
}

/// Validates every area and rejects repeated area names.
///
/// Names identify areas in interactions and snapshot comparisons.
pub fn validate_areas(areas: &[Area]) -> Result<(), ValidationError> {
    let mut names = AHashSet::with_capacity(areas.len());
    for area in areas {
        validate_area(area)
            .and_then(|()| {
                if names.insert(area.area_name.as_str()) {
                    Ok(())
                } else {
                    Err(ValidationError::DuplicateAreaName {
                        area_id: area.id.clone(),
                        area_name: area.area_name.clone(),
                    })
                }
            })
            .inspect_err(|e| log::warn!("Rejected area '{}': {}", area.id, e))?;
    }
    Ok(())
}
