//! Snapshot loading from JSON text

use super::session::{require_latest_farm, SessionRecord};
use crate::error::{FarmTimerError, Result};
use crate::models::Snapshot;
use serde_json::Value;
use std::path::Path;

/// Parse a snapshot from any of the shapes the extension stores.
///
/// Accepted inputs, checked in order:
/// - an array of session records (latest with farm data wins)
/// - a storage dump `{ "sessionData": [...] }`
/// - a single session record `{ "responseBody": { "farm": {...} } }`
/// - an API response body `{ "farm": {...} }`
/// - a bare farm object
pub fn parse_snapshot(json: &str) -> Result<Snapshot> {
    let value: Value = serde_json::from_str(json)?;
    snapshot_from_value(value)
}

pub fn parse_snapshot_from_file(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FarmTimerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&json)
}

pub fn snapshot_from_value(value: Value) -> Result<Snapshot> {
    match value {
        Value::Array(_) => {
            let records: Vec<SessionRecord> = serde_json::from_value(value)?;
            require_latest_farm(&records)
        }
        Value::Object(mut root) => {
            if let Some(sessions) = root.remove("sessionData").filter(Value::is_array) {
                let records: Vec<SessionRecord> = serde_json::from_value(sessions)?;
                return require_latest_farm(&records);
            }
            if root.contains_key("responseBody") && root.contains_key("timestamp") {
                let record: SessionRecord = serde_json::from_value(Value::Object(root))?;
                return require_latest_farm(std::slice::from_ref(&record));
            }
            if let Some(Value::Object(farm)) = root.get("farm") {
                return Ok(Snapshot::new(farm.clone()));
            }
            Ok(Snapshot::new(root))
        }
        other => Snapshot::from_value(other),
    }
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_snapshot(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_farm() {
        let snapshot = parse_snapshot(r#"{ "crops": {} }"#).unwrap();
        assert_eq!(snapshot.count("crops"), 0);
        assert!(snapshot.get("crops").is_some());
    }

    #[test]
    fn test_response_body_shape() {
        let snapshot = parse_snapshot(r#"{ "farm": { "beehives": { "1": {} } } }"#).unwrap();
        assert_eq!(snapshot.count("beehives"), 1);
    }

    #[test]
    fn test_single_record_shape() {
        let json = json!({
            "timestamp": 5,
            "method": "GET",
            "url": "/session",
            "responseBody": { "farm": { "stones": { "a": {}, "b": {} } } }
        });
        let snapshot = parse_snapshot(&json.to_string()).unwrap();
        assert_eq!(snapshot.count("stones"), 2);
    }

    #[test]
    fn test_storage_dump_shape() {
        let json = json!({
            "sessionData": [
                { "timestamp": 1, "responseBody": { "farm": { "crops": { "1": {} } } } },
                { "timestamp": 2, "responseBody": { "farm": { "crops": {} } } }
            ]
        });
        let snapshot = parse_snapshot(&json.to_string()).unwrap();
        assert_eq!(snapshot.count("crops"), 0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(parse_snapshot("{"), Err(FarmTimerError::InvalidJson(_))));
        assert!(matches!(parse_snapshot("42"), Err(FarmTimerError::NotAnObject { .. })));
        assert!(matches!(parse_snapshot("[]"), Err(FarmTimerError::NoFarmData { records: 0 })));
    }
}
