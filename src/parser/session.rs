//! Captured API session records
//!
//! The extension's network interceptor stores every game API response it
//! sees. The farm state lives at `responseBody.farm` on session and
//! autosave responses.

use crate::error::{FarmTimerError, Result};
use crate::models::Snapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub timestamp: i64,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SessionKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Session,
    Autosave,
}

impl SessionRecord {
    /// The farm object carried by this response, if any
    pub fn farm(&self) -> Option<&serde_json::Map<String, Value>> {
        self.response_body
            .as_ref()
            .and_then(|body| body.get("farm"))
            .and_then(Value::as_object)
    }
}

/// Farm snapshot from the most recent record that carries one
pub fn latest_farm(records: &[SessionRecord]) -> Option<Snapshot> {
    records
        .iter()
        .filter(|r| r.farm().is_some())
        .max_by_key(|r| r.timestamp)
        .and_then(|r| r.farm())
        .map(|farm| Snapshot::new(farm.clone()))
}

/// Like [`latest_farm`], but an error when no record has farm data
pub fn require_latest_farm(records: &[SessionRecord]) -> Result<Snapshot> {
    latest_farm(records).ok_or(FarmTimerError::NoFarmData {
        records: records.len(),
    })
}
