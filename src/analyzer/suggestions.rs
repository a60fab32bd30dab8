//! Threshold-based farming suggestions

use crate::models::{Impact, Snapshot, Suggestion, SuggestionKind, SuggestionThresholds};

/// Suggestions in check order: idle plots, then beehive count
pub fn suggest(snapshot: &Snapshot, thresholds: &SuggestionThresholds) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let empty_plots = thresholds
        .plot_capacity
        .saturating_sub(snapshot.count("crops"));
    if empty_plots > 0 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Efficiency,
            Impact::High,
            "Unused plots",
            format!(
                "You have {} empty plots. Plant crops to increase your income.",
                empty_plots
            ),
            "Plant crops",
        ));
    }

    if snapshot.count("beehives") < thresholds.beehive_target {
        suggestions.push(Suggestion::new(
            SuggestionKind::Timing,
            Impact::Medium,
            "Limited honey production",
            "Build more beehives to increase honey production.",
            "Build beehives",
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_snapshot_gets_both() {
        let suggestions = suggest(&Snapshot::default(), &SuggestionThresholds::default());

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title, "Unused plots");
        assert!(suggestions[0].description.contains("50 empty plots"));
        assert_eq!(suggestions[0].impact, Impact::High);
        assert_eq!(suggestions[1].kind, SuggestionKind::Timing);
    }

    #[test]
    fn test_thresholds_met() {
        let crops: serde_json::Map<_, _> = (0..3).map(|i| (i.to_string(), json!({}))).collect();
        let hives: serde_json::Map<_, _> = (0..2).map(|i| (i.to_string(), json!({}))).collect();
        let snapshot = Snapshot::from_value(json!({ "crops": crops, "beehives": hives })).unwrap();

        let thresholds = SuggestionThresholds {
            plot_capacity: 3,
            beehive_target: 2,
        };
        assert!(suggest(&snapshot, &thresholds).is_empty());
    }
}
