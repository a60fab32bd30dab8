//! Per-crop-type grouping for the tabbed crop view

use crate::models::{DerivedTimer, TimerCategory};
use crate::utils::{crop_name, parse_quantity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const CROP_ICONS: &[(&str, &str)] = &[
    ("Artichoke", "🥬"),
    ("Soybean", "🌱"),
    ("Wheat", "🌾"),
    ("Corn", "🌽"),
    ("Carrot", "🥕"),
    ("Sunflower", "🌻"),
    ("Potato", "🥔"),
    ("Pumpkin", "🎃"),
    ("Kale", "🥬"),
    ("Turnip", "🟣"),
];

const DEFAULT_ICON: &str = "🌱";
const DEFAULT_NAME: &str = "Crop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropGroup {
    pub name: String,
    pub icon: String,
    pub items: Vec<CropItem>,
    pub total_quantity: f64,
    pub ready_quantity: f64,
    pub ready_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropItem {
    pub id: String,
    pub label: String,
    pub quantity: f64,
    pub remaining_millis: u64,
    pub total_millis: u64,
    pub is_ready: bool,
    pub status: String,
}

/// A crop tab: one group plus its summary line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropPanel {
    pub name: String,
    pub icon: String,
    pub stats: String,
    pub count: usize,
    pub ready_count: usize,
    pub items: Vec<CropItem>,
}

pub fn crop_icon(name: &str) -> &'static str {
    CROP_ICONS
        .iter()
        .find(|(crop, _)| *crop == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Group crop timers by name, keyed and ordered by crop name.
///
/// Non-crop timers are ignored. Items inside a group are ordered ready
/// first, then by remaining time.
pub fn group_crops_by_type(timers: &[DerivedTimer], now: i64) -> BTreeMap<String, CropGroup> {
    let mut groups: BTreeMap<String, CropGroup> = BTreeMap::new();

    for timer in timers.iter().filter(|t| t.category == TimerCategory::Crop) {
        let name = match crop_name(&timer.label) {
            "" => DEFAULT_NAME,
            name => name,
        };
        let item = crop_item(timer, now);

        let group = groups.entry(name.to_string()).or_insert_with(|| CropGroup {
            name: name.to_string(),
            icon: crop_icon(name).to_string(),
            items: Vec::new(),
            total_quantity: 0.0,
            ready_quantity: 0.0,
            ready_count: 0,
        });

        group.total_quantity += item.quantity;
        if item.is_ready {
            group.ready_quantity += item.quantity;
            group.ready_count += 1;
        }
        group.items.push(item);
    }

    for group in groups.values_mut() {
        group
            .items
            .sort_by(|a, b| b.is_ready.cmp(&a.is_ready).then(a.remaining_millis.cmp(&b.remaining_millis)));
    }

    groups
}

/// Panels in crop name order
pub fn crop_panels(groups: BTreeMap<String, CropGroup>) -> Vec<CropPanel> {
    groups
        .into_values()
        .map(|group| CropPanel {
            stats: crop_stats(&group),
            count: group.items.len(),
            ready_count: group.ready_count,
            name: group.name,
            icon: group.icon,
            items: group.items,
        })
        .collect()
}

pub fn crop_stats(group: &CropGroup) -> String {
    let mut stats = format!("Total: {:.1}", group.total_quantity);
    if group.ready_count > 0 {
        stats.push_str(&format!(" | Ready: {:.1}", group.ready_quantity));
    }
    stats
}

fn crop_item(timer: &DerivedTimer, now: i64) -> CropItem {
    CropItem {
        id: timer.id.clone(),
        label: timer.label.clone(),
        quantity: parse_quantity(&timer.label),
        remaining_millis: timer.remaining_millis,
        total_millis: timer.total_millis,
        is_ready: timer.is_ready,
        status: status_text(timer, now),
    }
}

/// "Ready to harvest", or the time left and the UTC finish time
fn status_text(timer: &DerivedTimer, now: i64) -> String {
    if timer.is_ready {
        return "Ready to harvest".to_string();
    }

    let remaining = timer.remaining_millis;
    let hours = remaining / 3_600_000;
    let minutes = (remaining % 3_600_000) / 60_000;
    let left = if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", remaining.div_ceil(1000))
    };

    let end_at = now.saturating_add(i64::try_from(remaining).unwrap_or(i64::MAX));
    match DateTime::<Utc>::from_timestamp_millis(end_at) {
        Some(end) => format!("Growing ({}) | Ends: {}", left, end.format("%d/%m %H:%M")),
        None => format!("Growing ({})", left),
    }
}
