//! Farm Timers
//!
//! Turns a captured Sunflower Land farm snapshot into normalized countdowns
//! for crops, buildings, beehives, resource nodes and fruit patches, plus a
//! handful of derived views (schedule, harvest calendar, suggestions).
//! Everything here is a pure function of the snapshot, the tables and `now`.

pub mod error;
pub mod models;
pub mod parser;
pub mod analyzer;
pub mod aggregator;
pub mod report;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{FarmTimerError, Result};
pub use models::{DerivedTimer, DurationTables, Snapshot, Suggestion, SuggestionThresholds, TimerCategory, TimerReport};
pub use analyzer::{derive_timers, suggest};
pub use aggregator::aggregate_timers;
pub use utils::format_duration;

/// Options for a full timer pass
#[derive(Debug, Clone)]
pub struct TimerOptions<'a> {
    pub tables: &'a DurationTables,
    pub thresholds: SuggestionThresholds,
}

impl Default for TimerOptions<'static> {
    fn default() -> Self {
        Self {
            tables: DurationTables::builtin(),
            thresholds: SuggestionThresholds::default(),
        }
    }
}

/// Main entry point: derive, order and annotate everything for `now`.
///
/// A missing snapshot yields an empty report.
pub fn calculate_timers(snapshot: Option<&Snapshot>, now: i64, options: &TimerOptions<'_>) -> TimerReport {
    let Some(snapshot) = snapshot else {
        return TimerReport::default();
    };

    // 1. Derive per-entity timers and side outputs
    let context = analyzer::analyze_snapshot(snapshot, now, options.tables);

    // 2. Order for display
    let timers = aggregate_timers(context.timers);

    let mut scheduled_activities = context.activities;
    scheduled_activities.sort_by_key(|a| a.scheduled_time);

    let mut harvest_calendar = context.calendar;
    harvest_calendar.sort_by_key(|h| h.harvest_time);

    // 3. Advice
    let suggestions = suggest(snapshot, &options.thresholds);

    TimerReport {
        timers,
        scheduled_activities,
        harvest_calendar,
        suggestions,
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
