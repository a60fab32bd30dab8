//! First-match-wins field resolution
//!
//! Snapshot records name the same field several ways depending on which
//! version of the game produced them. Every resolver here walks its alias
//! list in order and returns the first *truthy* value: `null`, `false`,
//! `0`, `""` and missing keys all count as absent and fall through to the
//! next alias.

use chrono::DateTime;
use serde_json::Value;

pub const PLANTED_AT: &[&str] = &["plantedAt", "planted_at", "createdAt"];
pub const CROP_NAME: &[&str] = &["name", "type"];
pub const CROP_QUANTITY: &[&str] = &["amount", "quantity"];
pub const READY_AT: &[&str] = &["readyAt"];
pub const HARVEST_AT: &[&str] = &["harvestAt"];
pub const HARVESTED_AT: &str = "harvestedAt";

pub const PRODUCTION: &[&str] = &["crafting", "cooking", "production"];
pub const STARTED_AT: &[&str] = &["startedAt", "started_at", "createdAt"];
pub const DURATION_SECONDS: &[&str] = &["timeRequired", "duration", "time"];
pub const BUILDING_NAME: &[&str] = &["name", "type"];
pub const PRODUCT_NAME: &[&str] = &["item", "recipe", "product"];

pub const HONEY_UPDATED_AT: &[&str] = &["updatedAt"];
pub const HONEY_PRODUCED: &[&str] = &["produced"];

pub const FRUIT_NAME: &[&str] = &["name"];
pub const FRUIT_AMOUNT: &[&str] = &["amount"];
pub const FRUIT_HARVESTED_AT: &[&str] = &["harvestedAt"];
pub const FRUIT_PLANTED_AT: &[&str] = &["plantedAt"];

/// JavaScript-style truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Millisecond timestamp from the first truthy alias.
///
/// Accepts numbers, numeric strings and RFC 3339 date strings. A value
/// that is present but unparseable is skipped like a missing one.
pub fn first_timestamp(record: &Value, aliases: &[&str]) -> Option<i64> {
    aliases
        .iter()
        .filter_map(|key| record.get(key))
        .filter(|v| is_truthy(v))
        .find_map(parse_timestamp)
}

/// Non-empty string from the first truthy alias
pub fn first_text<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|key| record.get(key))
        .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
}

/// Non-zero number from the first truthy alias (numeric strings allowed)
pub fn first_number(record: &Value, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .filter_map(|key| record.get(key))
        .filter(|v| is_truthy(v))
        .find_map(parse_number)
}

/// `record[key] === 0`
pub fn is_exact_zero(record: &Value, key: &str) -> bool {
    record
        .get(key)
        .and_then(Value::as_f64)
        .map(|n| n == 0.0)
        .unwrap_or(false)
}

fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n != 0.0).then_some(n)
}

fn parse_timestamp(value: &Value) -> Option<i64> {
    if let Some(n) = parse_number(value) {
        return Some(n as i64);
    }
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"plantedAt": 10, "planted_at": 20}), Some(10) ; "first alias wins")]
    #[test_case(json!({"planted_at": 20, "createdAt": 30}), Some(20) ; "second alias")]
    #[test_case(json!({"plantedAt": 0, "createdAt": 30}), Some(30) ; "zero falls through")]
    #[test_case(json!({"plantedAt": null}), None ; "null is absent")]
    #[test_case(json!({"plantedAt": "1500"}), Some(1500) ; "numeric string")]
    #[test_case(json!({"plantedAt": "soon", "createdAt": 7}), Some(7) ; "garbage skipped")]
    #[test_case(json!({"plantedAt": "2024-01-15T10:00:00Z"}), Some(1_705_312_800_000) ; "rfc3339")]
    fn test_first_timestamp(record: Value, expected: Option<i64>) {
        assert_eq!(first_timestamp(&record, PLANTED_AT), expected);
    }

    #[test]
    fn test_first_text_skips_empty_and_non_strings() {
        let record = json!({ "name": "", "type": "Potato" });
        assert_eq!(first_text(&record, CROP_NAME), Some("Potato"));

        let record = json!({ "name": 42 });
        assert_eq!(first_text(&record, CROP_NAME), None);
    }

    #[test]
    fn test_is_exact_zero() {
        assert!(is_exact_zero(&json!({ "amount": 0 }), "amount"));
        assert!(is_exact_zero(&json!({ "amount": 0.0 }), "amount"));
        assert!(!is_exact_zero(&json!({ "amount": "0" }), "amount"));
        assert!(!is_exact_zero(&json!({}), "amount"));
    }

    #[test]
    fn test_first_number_ignores_zero() {
        let record = json!({ "timeRequired": 0, "duration": 90 });
        assert_eq!(first_number(&record, DURATION_SECONDS), Some(90.0));
    }
}
