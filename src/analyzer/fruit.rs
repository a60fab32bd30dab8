//! Fruit patch timers and the harvest calendar

use crate::models::{AnalysisContext, DerivedTimer, DurationTables, HarvestEvent, Snapshot, TimerCategory};
use crate::parser::fields;

const CATEGORY: &str = "fruitPatches";

pub fn analyze_fruit_patches(snapshot: &Snapshot, tables: &DurationTables, context: &mut AnalysisContext) {
    for (id, patch) in snapshot.category(CATEGORY) {
        let Some(fruit) = patch.child("fruit") else {
            context.skip(CATEGORY, id, "no fruit planted");
            continue;
        };

        let fruit_type = fruit.text(fields::FRUIT_NAME).unwrap_or("Fruit");
        let growth = tables.fruit_growth_millis(fruit_type);

        // Last harvest restarts the cycle; otherwise count from planting
        let Some(cycle_start) = fruit
            .timestamp(fields::FRUIT_HARVESTED_AT)
            .or_else(|| fruit.timestamp(fields::FRUIT_PLANTED_AT))
        else {
            context.skip(CATEGORY, id, "fruit has no timing basis");
            continue;
        };
        let harvest_time = cycle_start.saturating_add(growth);

        context.add_timer(DerivedTimer::until(
            format!("fruit-{}", id),
            TimerCategory::Fruit,
            format!("{} {}", fruit_type, id),
            harvest_time,
            growth,
            context.now,
        ));

        let amount = fruit.number(fields::FRUIT_AMOUNT).unwrap_or(1.0);
        context.add_harvest(HarvestEvent {
            id: format!("fruit-{}", id),
            crop_type: fruit_type.to_string(),
            location: format!("Tree {}", id),
            harvest_time,
            value: tables.fruit_value(fruit_type) * amount,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_705_312_800_000;
    const HOUR: i64 = 3_600_000;

    fn derive(patches: serde_json::Value) -> AnalysisContext {
        let snapshot = Snapshot::from_value(json!({ "fruitPatches": patches })).unwrap();
        let mut context = AnalysisContext::new(NOW);
        analyze_fruit_patches(&snapshot, DurationTables::builtin(), &mut context);
        context
    }

    #[test]
    fn test_harvested_at_takes_priority() {
        let context = derive(json!({
            "1": { "fruit": { "name": "Blueberry", "plantedAt": NOW - 100 * HOUR, "harvestedAt": NOW - 2 * HOUR, "amount": 4 } }
        }));

        let timer = &context.timers[0];
        assert_eq!(timer.label, "Blueberry 1");
        assert_eq!(timer.remaining_millis, 4 * HOUR as u64);
        assert_eq!(timer.total_millis, 6 * HOUR as u64);

        let event = &context.calendar[0];
        assert_eq!(event.location, "Tree 1");
        assert_eq!(event.harvest_time, NOW + 4 * HOUR);
        assert_eq!(event.value, 4.0);
    }

    #[test]
    fn test_planted_at_with_unknown_fruit() {
        let context = derive(json!({
            "2": { "fruit": { "name": "Durian", "plantedAt": NOW - 25 * HOUR } }
        }));

        let timer = &context.timers[0];
        assert!(timer.is_ready);
        assert_eq!(timer.total_millis, 24 * HOUR as u64);
        assert_eq!(context.calendar[0].value, 2.0);
    }

    #[test]
    fn test_untimed_patches_skipped() {
        let context = derive(json!({
            "3": { "fruit": { "name": "Apple" } },
            "4": {}
        }));
        assert!(context.timers.is_empty());
        assert!(context.calendar.is_empty());
    }
}
