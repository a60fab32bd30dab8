//! Derived countdowns and the side outputs of a timer pass

use crate::utils::format_duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerCategory {
    Crop,
    Building,
    Beehive,
    Resource,
    Fruit,
}

/// One normalized countdown, rebuilt from scratch on every pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTimer {
    pub id: String,
    pub category: TimerCategory,
    pub label: String,
    pub remaining_millis: u64,
    pub total_millis: u64,
    pub is_ready: bool,
    pub remaining_formatted: String,
    pub total_formatted: String,
}

impl DerivedTimer {
    pub fn new(
        id: impl Into<String>,
        category: TimerCategory,
        label: impl Into<String>,
        remaining_millis: u64,
        total_millis: u64,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            remaining_millis,
            total_millis,
            is_ready: remaining_millis == 0,
            remaining_formatted: format_duration(remaining_millis as i64),
            total_formatted: format_duration(total_millis as i64),
        }
    }

    /// Timer ending at `end_at`, observed at `now` (both epoch millis)
    pub fn until(
        id: impl Into<String>,
        category: TimerCategory,
        label: impl Into<String>,
        end_at: i64,
        total_millis: i64,
        now: i64,
    ) -> Self {
        Self::new(
            id,
            category,
            label,
            remaining_between(now, end_at),
            total_millis.max(0) as u64,
        )
    }
}

/// `max(0, end_at - now)` without overflow
pub fn remaining_between(now: i64, end_at: i64) -> u64 {
    end_at.saturating_sub(now).max(0) as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Collection,
    Respawn,
}

/// Something the player will want to do at a known instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledActivity {
    pub id: String,
    pub kind: ActivityKind,
    pub name: String,
    pub scheduled_time: i64,
    pub estimated_duration: u64,
    pub priority: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestEvent {
    pub id: String,
    pub crop_type: String,
    pub location: String,
    pub harvest_time: i64,
    pub value: f64,
}
