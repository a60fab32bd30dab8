//! Building production timers (crafting, cooking)

use crate::models::{AnalysisContext, DerivedTimer, Entity, Snapshot, TimerCategory};
use crate::parser::fields;

const CATEGORY: &str = "buildings";

pub fn analyze_buildings(snapshot: &Snapshot, context: &mut AnalysisContext) {
    for (id, building) in snapshot.category(CATEGORY) {
        match building_timer(id, building, context.now) {
            Ok(timer) => context.add_timer(timer),
            Err(reason) => context.skip(CATEGORY, id, reason),
        }
    }
}

fn building_timer(id: &str, building: Entity<'_>, now: i64) -> Result<DerivedTimer, &'static str> {
    let job = building
        .first_child(fields::PRODUCTION)
        .ok_or("nothing in production")?;
    let started_at = job
        .timestamp(fields::STARTED_AT)
        .ok_or("production has no start time")?;
    let duration_ms = job
        .number(fields::DURATION_SECONDS)
        .map(|seconds| (seconds * 1000.0).round() as i64)
        .ok_or("production has no duration")?;

    let building_name = building.text(fields::BUILDING_NAME).unwrap_or("Building");
    let product = job.text(fields::PRODUCT_NAME).unwrap_or("Item");

    Ok(DerivedTimer::until(
        format!("building-{}", id),
        TimerCategory::Building,
        format!("{} ({})", building_name, product),
        started_at.saturating_add(duration_ms),
        duration_ms,
        now,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_705_312_800_000;

    fn derive(buildings: serde_json::Value) -> AnalysisContext {
        let snapshot = Snapshot::from_value(json!({ "buildings": buildings })).unwrap();
        let mut context = AnalysisContext::new(NOW);
        analyze_buildings(&snapshot, &mut context);
        context
    }

    #[test]
    fn test_bakery_crafting() {
        let context = derive(json!({
            "b1": { "name": "Bakery", "crafting": { "startedAt": NOW - 1_800_000, "timeRequired": 3600, "item": "Bread" } }
        }));

        let timer = &context.timers[0];
        assert_eq!(timer.id, "building-b1");
        assert_eq!(timer.label, "Bakery (Bread)");
        assert_eq!(timer.remaining_millis, 1_800_000);
        assert_eq!(timer.total_millis, 3_600_000);
        assert!(!timer.is_ready);
    }

    #[test]
    fn test_aliases_and_defaults() {
        let context = derive(json!({
            "k": { "cooking": { "started_at": NOW - 120_000, "duration": 60 } },
            "f": { "type": "Fire Pit", "production": { "createdAt": NOW, "time": 30, "recipe": "Boiled Eggs" } }
        }));

        assert_eq!(context.timers.len(), 2);
        let fire_pit = context.timers.iter().find(|t| t.id == "building-f").unwrap();
        assert_eq!(fire_pit.label, "Fire Pit (Boiled Eggs)");
        let kitchen = context.timers.iter().find(|t| t.id == "building-k").unwrap();
        assert_eq!(kitchen.label, "Building (Item)");
        assert!(kitchen.is_ready);
    }

    #[test]
    fn test_crafting_wins_over_cooking() {
        let context = derive(json!({
            "b": {
                "name": "Kitchen",
                "crafting": { "startedAt": NOW, "timeRequired": 60, "item": "Bread" },
                "cooking": { "startedAt": NOW, "timeRequired": 600, "item": "Soup" }
            }
        }));

        assert_eq!(context.timers.len(), 1);
        assert_eq!(context.timers[0].label, "Kitchen (Bread)");
        assert_eq!(context.timers[0].remaining_millis, 60_000);
    }

    #[test]
    fn test_idle_or_malformed_buildings_skipped() {
        let context = derive(json!({
            "idle": { "name": "Bakery" },
            "no_start": { "crafting": { "timeRequired": 60 } },
            "no_duration": { "crafting": { "startedAt": NOW } }
        }));
        assert!(context.timers.is_empty());
        assert_eq!(context.skipped, 3);
    }
}
