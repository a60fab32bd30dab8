//! Crop plot timers

use crate::models::{AnalysisContext, DerivedTimer, DurationTables, Entity, Snapshot, TimerCategory};
use crate::parser::fields;
use crate::utils::crop_label;

const CATEGORY: &str = "crops";

pub fn analyze_crops(snapshot: &Snapshot, tables: &DurationTables, context: &mut AnalysisContext) {
    for (plot_id, plot) in snapshot.category(CATEGORY) {
        match crop_timer(plot_id, plot, tables, context.now) {
            Ok(timer) => context.add_timer(timer),
            Err(reason) => context.skip(CATEGORY, plot_id, reason),
        }
    }
}

/// Timer for one plot, or the reason there isn't one.
///
/// An already harvested or zero-quantity crop never gets a timer, even
/// with explicit timing fields. Otherwise the end time is `readyAt`, then
/// `harvestAt`, then the planting time plus the table growth duration.
fn crop_timer(
    plot_id: &str,
    plot: Entity<'_>,
    tables: &DurationTables,
    now: i64,
) -> Result<DerivedTimer, &'static str> {
    let crop = plot.child("crop").ok_or("no crop planted")?;
    let name = crop.text(fields::CROP_NAME).ok_or("crop has no name")?;
    let planted_at = crop
        .timestamp(fields::PLANTED_AT)
        .ok_or("crop has no planting time")?;

    if crop.has(fields::HARVESTED_AT) {
        return Err("crop already harvested");
    }
    if fields::CROP_QUANTITY.iter().any(|key| crop.is_zero(key)) {
        return Err("crop quantity is zero");
    }

    let end_at = crop
        .timestamp(fields::READY_AT)
        .or_else(|| crop.timestamp(fields::HARVEST_AT))
        .unwrap_or_else(|| planted_at.saturating_add(tables.crop_growth_millis(name)));

    let quantity = crop.number(fields::CROP_QUANTITY).unwrap_or(1.0);

    Ok(DerivedTimer::until(
        format!("crop-{}", plot_id),
        TimerCategory::Crop,
        crop_label(name, quantity),
        end_at,
        end_at.saturating_sub(planted_at),
        now,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_705_312_800_000;

    fn derive(crops: serde_json::Value) -> AnalysisContext {
        let snapshot = Snapshot::from_value(json!({ "crops": crops })).unwrap();
        let mut context = AnalysisContext::new(NOW);
        analyze_crops(&snapshot, DurationTables::builtin(), &mut context);
        context
    }

    #[test]
    fn test_ready_at_in_future() {
        let context = derive(json!({
            "p1": { "crop": { "name": "Potato", "plantedAt": NOW - 3_600_000, "readyAt": NOW + 3_600_000, "amount": 1 } }
        }));

        assert_eq!(context.timers.len(), 1);
        let timer = &context.timers[0];
        assert_eq!(timer.id, "crop-p1");
        assert_eq!(timer.label, "Potato x1");
        assert_eq!(timer.remaining_millis, 3_600_000);
        assert_eq!(timer.total_millis, 7_200_000);
        assert!(!timer.is_ready);
    }

    #[test]
    fn test_harvest_at_and_alias_names() {
        let context = derive(json!({
            "1": { "crop": { "type": "Carrot", "planted_at": NOW - 1_000, "harvestAt": NOW - 1, "quantity": 2.5 } }
        }));

        let timer = &context.timers[0];
        assert_eq!(timer.label, "Carrot x2.5");
        assert!(timer.is_ready);
    }

    #[test]
    fn test_falls_back_to_growth_table() {
        let context = derive(json!({
            "1": { "crop": { "name": "Sunflower", "createdAt": NOW - 30_000 } }
        }));

        let timer = &context.timers[0];
        assert_eq!(timer.remaining_millis, 30_000);
        assert_eq!(timer.total_millis, 60_000);
        assert_eq!(timer.label, "Sunflower x1");
    }

    #[test]
    fn test_skips_incomplete_plots() {
        let context = derive(json!({
            "empty": {},
            "nameless": { "crop": { "plantedAt": NOW } },
            "untimed": { "crop": { "name": "Potato" } },
            "harvested": { "crop": { "name": "Potato", "plantedAt": NOW, "harvestedAt": NOW } },
            "zero": { "crop": { "name": "Potato", "plantedAt": NOW, "amount": 0 } },
            "zero_qty": { "crop": { "name": "Potato", "plantedAt": NOW, "quantity": 0 } }
        }));

        assert!(context.timers.is_empty());
        assert_eq!(context.skipped, 6);
    }

    #[test]
    fn test_exclusions_hold_with_explicit_end_time() {
        let context = derive(json!({
            "a": { "crop": { "name": "Potato", "plantedAt": NOW, "readyAt": NOW + 10, "amount": 0 } },
            "b": { "crop": { "name": "Potato", "plantedAt": NOW, "readyAt": NOW + 10, "harvestedAt": NOW - 5 } }
        }));
        assert!(context.timers.is_empty());
    }

    #[test]
    fn test_name_wins_over_type() {
        let context = derive(json!({
            "1": { "crop": { "name": "Potato", "type": "Carrot", "plantedAt": NOW } }
        }));
        assert_eq!(context.timers[0].label, "Potato x1");
        assert_eq!(context.timers[0].remaining_millis, 300_000);
    }

    #[test]
    fn test_ready_at_wins_over_harvest_at() {
        let context = derive(json!({
            "1": { "crop": { "name": "Potato", "plantedAt": NOW, "readyAt": NOW + 10, "harvestAt": NOW + 99 } }
        }));
        assert_eq!(context.timers[0].remaining_millis, 10);
    }
}
