//! Beehive honey cycles

use crate::models::{ActivityKind, AnalysisContext, DerivedTimer, DurationTables, ScheduledActivity, Snapshot, TimerCategory};
use crate::parser::fields;

const CATEGORY: &str = "beehives";
const COLLECTION_MILLIS: u64 = 2 * 60 * 1000;

/// Every hive with a `honey` object gets a timer for its current cycle,
/// measured from `honey.updatedAt` (epoch when missing).
pub fn analyze_beehives(snapshot: &Snapshot, tables: &DurationTables, context: &mut AnalysisContext) {
    let cycle = tables.beehive_cycle_millis();

    for (id, hive) in snapshot.category(CATEGORY) {
        let Some(honey) = hive.child("honey") else {
            context.skip(CATEGORY, id, "no honey data");
            continue;
        };

        let updated_at = honey.timestamp(fields::HONEY_UPDATED_AT).unwrap_or(0);
        let produced = honey.number(fields::HONEY_PRODUCED).unwrap_or(0.0);
        let next_honey = updated_at.saturating_add(cycle);

        let timer = DerivedTimer::until(
            format!("beehive-{}", id),
            TimerCategory::Beehive,
            format!("Beehive {} ({:.1} honey)", id, produced),
            next_honey,
            cycle,
            context.now,
        );

        context.add_activity(ScheduledActivity {
            id: format!("collect-honey-{}", id),
            kind: ActivityKind::Collection,
            name: format!("Collect honey from beehive {}", id),
            scheduled_time: next_honey,
            estimated_duration: COLLECTION_MILLIS,
            priority: if timer.is_ready { 3 } else { 1 },
        });
        context.add_timer(timer);
    }
}
