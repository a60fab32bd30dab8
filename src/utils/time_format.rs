//! Compact duration strings ("1h 30m", "2j 4h")

const SECOND: i64 = 1000;
const MINUTE: i64 = 60;
const HOUR: i64 = 3600;
const DAY: i64 = 86400;

/// Format a millisecond duration using at most two non-zero units.
///
/// Days use the `j` suffix the game UI shows. Seconds are dropped once
/// the duration reaches a full day. Zero and negative inputs give `"0s"`.
pub fn format_duration(ms: i64) -> String {
    if ms <= 0 {
        return "0s".to_string();
    }

    let total_seconds = ms / SECOND;
    let days = total_seconds / DAY;
    let hours = (total_seconds % DAY) / HOUR;
    let minutes = (total_seconds % HOUR) / MINUTE;
    let seconds = total_seconds % MINUTE;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{}j", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 && days == 0 {
        parts.push(format!("{}s", seconds));
    }

    if parts.is_empty() {
        return "0s".to_string();
    }

    parts.truncate(2);
    parts.join(" ")
}
