//! Errors raised at the library boundary
//!
//! The derivation pass itself never fails; these only cover turning
//! external input (JSON text, table files) into in-memory values.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FarmTimerError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("snapshot root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("no farm data found in {records} session record(s)")]
    NoFarmData { records: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid duration tables in {}: {source}", .path.display())]
    InvalidTables {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FarmTimerError>;

/// Name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
