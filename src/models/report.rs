//! Analysis context and the final result of a timer pass

use super::{DerivedTimer, HarvestEvent, ScheduledActivity, Suggestion};
use serde::{Deserialize, Serialize};

/// Accumulates everything the per-category analyzers emit
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub now: i64,
    pub timers: Vec<DerivedTimer>,
    pub activities: Vec<ScheduledActivity>,
    pub calendar: Vec<HarvestEvent>,
    pub skipped: usize,
}

impl AnalysisContext {
    pub fn new(now: i64) -> Self {
        Self {
            now,
            ..Default::default()
        }
    }

    pub fn add_timer(&mut self, timer: DerivedTimer) {
        self.timers.push(timer);
    }

    pub fn add_activity(&mut self, activity: ScheduledActivity) {
        self.activities.push(activity);
    }

    pub fn add_harvest(&mut self, event: HarvestEvent) {
        self.calendar.push(event);
    }

    /// Record that an entity produced no timer
    pub fn skip(&mut self, category: &str, id: &str, reason: &str) {
        tracing::trace!(category, id, reason, "no timer derived");
        self.skipped += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerReport {
    pub timers: Vec<DerivedTimer>,
    pub scheduled_activities: Vec<ScheduledActivity>,
    pub harvest_calendar: Vec<HarvestEvent>,
    pub suggestions: Vec<Suggestion>,
}

impl TimerReport {
    pub fn ready_count(&self) -> usize {
        self.timers.iter().filter(|t| t.is_ready).count()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
            && self.scheduled_activities.is_empty()
            && self.harvest_calendar.is_empty()
            && self.suggestions.is_empty()
    }
}
