//! Merging of ready crops that share a name

use crate::models::{DerivedTimer, TimerCategory};
use crate::utils::{crop_name, format_quantity, parse_quantity};
use std::collections::BTreeMap;

/// Group ready crop timers by crop name.
///
/// Single-member groups pass through untouched; larger groups collapse
/// into one `"{name} x{total} ({count} plots)"` entry. Output is ordered
/// by crop name.
pub fn group_ready_crops(ready: Vec<DerivedTimer>) -> Vec<DerivedTimer> {
    let mut groups: BTreeMap<String, Vec<DerivedTimer>> = BTreeMap::new();

    for timer in ready {
        let name = match crop_name(&timer.label) {
            "" => timer.label.clone(),
            name => name.to_string(),
        };
        groups.entry(name).or_default().push(timer);
    }

    groups
        .into_iter()
        .filter_map(|(name, mut members)| {
            if members.len() == 1 {
                members.pop()
            } else {
                Some(merge_group(&name, &members))
            }
        })
        .collect()
}

fn merge_group(name: &str, members: &[DerivedTimer]) -> DerivedTimer {
    let total_quantity: f64 = members.iter().map(|t| parse_quantity(&t.label)).sum();
    let total_millis = members.first().map(|t| t.total_millis).unwrap_or(0);

    DerivedTimer::new(
        format!("grouped-{}", name),
        TimerCategory::Crop,
        format!(
            "{} x{} ({} plots)",
            name,
            format_quantity(total_quantity),
            members.len()
        ),
        0,
        total_millis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ready(id: &str, label: &str) -> DerivedTimer {
        DerivedTimer::new(id, TimerCategory::Crop, label, 0, 300_000)
    }

    #[test]
    fn test_groups_same_name() {
        let grouped = group_ready_crops(vec![
            ready("crop-1", "Potato x1"),
            ready("crop-2", "Carrot x1"),
            ready("crop-3", "Potato x2"),
        ]);

        let labels: Vec<&str> = grouped.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Carrot x1", "Potato x3 (2 plots)"]);
        assert_eq!(grouped[0].id, "crop-2");
        assert_eq!(grouped[1].id, "grouped-Potato");
        assert!(grouped[1].is_ready);
        assert_eq!(grouped[1].total_millis, 300_000);
    }

    #[test]
    fn test_unparseable_quantity_counts_as_one() {
        let grouped = group_ready_crops(vec![ready("a", "Kale"), ready("b", "Kale x1.5")]);
        assert_eq!(grouped[0].label, "Kale x2.5 (2 plots)");
    }
}
