//! Respawn timers for mined and chopped resource nodes

use crate::models::{
    ActivityKind, AnalysisContext, DerivedTimer, DurationTables, Entity, ResourceKind, ScheduledActivity, Snapshot,
    TimerCategory,
};

pub fn analyze_resources(snapshot: &Snapshot, tables: &DurationTables, context: &mut AnalysisContext) {
    for kind in ResourceKind::ALL {
        let cooldown = tables.respawn_millis(kind);

        for category in kind.categories() {
            for (id, node) in snapshot.category(category) {
                let Some(harvested_at) = harvested_at(node, kind) else {
                    context.skip(category, id, "node not harvested");
                    continue;
                };
                let respawn_at = harvested_at.saturating_add(cooldown);

                context.add_timer(DerivedTimer::until(
                    format!("{}-{}", kind.slug(), id),
                    TimerCategory::Resource,
                    format!("{} {} (respawn)", kind.label(), id),
                    respawn_at,
                    cooldown,
                    context.now,
                ));
                context.add_activity(ScheduledActivity {
                    id: format!("{}-respawn-{}", kind.slug(), id),
                    kind: ActivityKind::Respawn,
                    name: format!("{} {} available", kind.label(), id),
                    scheduled_time: respawn_at,
                    estimated_duration: 0,
                    priority: 1,
                });
            }
        }
    }
}

/// Harvest timestamp on the node itself, else on its material sub-object
fn harvested_at(node: Entity<'_>, kind: ResourceKind) -> Option<i64> {
    let field = [kind.harvested_field()];
    node.timestamp(&field)
        .or_else(|| node.child(kind.material_key())?.timestamp(&field))
}
