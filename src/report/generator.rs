//! Report generation

use crate::models::TimerReport;
use chrono::{DateTime, Utc};

pub fn generate_markdown_report(report: &TimerReport) -> String {
    let mut out = String::new();

    out.push_str("# Farm Timers Report\n\n");

    // Summary
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Active Timers**: {}\n", report.timers.len()));
    out.push_str(&format!("- **Ready Now**: {}\n", report.ready_count()));
    out.push_str(&format!("- **Scheduled Activities**: {}\n", report.scheduled_activities.len()));
    out.push_str(&format!("- **Upcoming Harvests**: {}\n\n", report.harvest_calendar.len()));

    // Timers
    if !report.timers.is_empty() {
        out.push_str("## Timers\n\n");
        out.push_str("| Status | Category | Name | Remaining | Total |\n");
        out.push_str("|---|---|---|---|---|\n");
        for timer in &report.timers {
            out.push_str(&format!(
                "| {} | {:?} | {} | {} | {} |\n",
                if timer.is_ready { "✅ Ready" } else { "⏳" },
                timer.category,
                timer.label,
                timer.remaining_formatted,
                timer.total_formatted
            ));
        }
        out.push('\n');
    }

    // Harvest calendar
    if !report.harvest_calendar.is_empty() {
        out.push_str("## 🍎 Harvest Calendar\n\n");
        for event in &report.harvest_calendar {
            out.push_str(&format!(
                "- {} at {} (value {:.1}) @ {}\n",
                event.crop_type,
                event.location,
                event.value,
                format_instant(event.harvest_time)
            ));
        }
        out.push('\n');
    }

    // Suggestions
    if !report.suggestions.is_empty() {
        out.push_str("## 💡 Suggestions\n\n");
        for suggestion in &report.suggestions {
            out.push_str(&format!(
                "- **{}** [{}]: {} → _{}_\n",
                suggestion.title, suggestion.impact, suggestion.description, suggestion.action_label
            ));
        }
        out.push('\n');
    }

    out
}

fn format_instant(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}
