//! Advisory messages shown under the timers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub action_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Efficiency,
    Timing,
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// Limits the suggestion checks compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionThresholds {
    /// Plots available on a farm; fewer planted crops means idle plots
    pub plot_capacity: usize,
    /// Fewer beehives than this triggers the honey suggestion
    pub beehive_target: usize,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            plot_capacity: 50,
            beehive_target: 5,
        }
    }
}

impl Suggestion {
    pub fn new(
        kind: SuggestionKind,
        impact: Impact,
        title: impl Into<String>,
        description: impl Into<String>,
        action_label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            impact,
            action_label: action_label.into(),
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Low => write!(f, "LOW"),
            Impact::Medium => write!(f, "MEDIUM"),
            Impact::High => write!(f, "HIGH"),
        }
    }
}
