//! Analysis modules for deriving timers from a farm snapshot

pub mod crops;
pub mod buildings;
pub mod beehives;
pub mod resources;
pub mod fruit;
pub mod suggestions;

pub use suggestions::suggest;

use crate::models::{AnalysisContext, DerivedTimer, DurationTables, Snapshot};

/// Run every category analyzer over a snapshot.
///
/// Never fails: entities that can't produce a timer are skipped and
/// counted in [`AnalysisContext::skipped`].
pub fn analyze_snapshot(snapshot: &Snapshot, now: i64, tables: &DurationTables) -> AnalysisContext {
    let mut context = AnalysisContext::new(now);

    crops::analyze_crops(snapshot, tables, &mut context);
    buildings::analyze_buildings(snapshot, &mut context);
    beehives::analyze_beehives(snapshot, tables, &mut context);
    resources::analyze_resources(snapshot, tables, &mut context);
    fruit::analyze_fruit_patches(snapshot, tables, &mut context);

    tracing::debug!(
        timers = context.timers.len(),
        activities = context.activities.len(),
        harvests = context.calendar.len(),
        skipped = context.skipped,
        "snapshot analyzed"
    );

    context
}

/// Unsorted timers for every entity that has one
pub fn derive_timers(snapshot: &Snapshot, now: i64, tables: &DurationTables) -> Vec<DerivedTimer> {
    analyze_snapshot(snapshot, now, tables).timers
}
