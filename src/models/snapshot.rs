//! Farm snapshot representation
//!
//! A snapshot is whatever the game last sent us: a JSON object keyed by
//! category (`crops`, `buildings`, `beehives`, `stones`, ...) whose values
//! map entity ids to loosely shaped records. Nothing here enforces a schema;
//! lookups that miss simply return `None`.

use crate::error::{json_type_name, FarmTimerError, Result};
use crate::parser::fields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    root: Map<String, Value>,
}

impl Snapshot {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Wrap a JSON value, rejecting anything that isn't an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(FarmTimerError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Iterate the entities of a category in key order.
    ///
    /// Missing categories and categories that aren't objects yield nothing.
    pub fn category<'a>(&'a self, key: &str) -> impl Iterator<Item = (&'a str, Entity<'a>)> + 'a {
        self.root
            .get(key)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|entries| entries.iter())
            .map(|(id, value)| (id.as_str(), Entity::new(value)))
    }

    /// Number of entries in a category, 0 when absent
    pub fn count(&self, key: &str) -> usize {
        self.root
            .get(key)
            .and_then(Value::as_object)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}

impl From<Map<String, Value>> for Snapshot {
    fn from(root: Map<String, Value>) -> Self {
        Self::new(root)
    }
}

/// Borrowed view over one entity record (or a nested sub-object of one)
#[derive(Debug, Clone, Copy)]
pub struct Entity<'a> {
    value: &'a Value,
}

impl<'a> Entity<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key)
    }

    /// Nested object under `key`, if it is present and truthy
    pub fn child(&self, key: &str) -> Option<Entity<'a>> {
        self.value
            .get(key)
            .filter(|v| fields::is_truthy(v))
            .map(Entity::new)
    }

    /// First truthy nested object among `aliases`
    pub fn first_child(&self, aliases: &[&str]) -> Option<Entity<'a>> {
        aliases.iter().find_map(|key| self.child(key))
    }

    pub fn timestamp(&self, aliases: &[&str]) -> Option<i64> {
        fields::first_timestamp(self.value, aliases)
    }

    pub fn text(&self, aliases: &[&str]) -> Option<&'a str> {
        fields::first_text(self.value, aliases)
    }

    pub fn number(&self, aliases: &[&str]) -> Option<f64> {
        fields::first_number(self.value, aliases)
    }

    /// True when `key` holds a number equal to zero
    pub fn is_zero(&self, key: &str) -> bool {
        fields::is_exact_zero(self.value, key)
    }

    /// True when `key` holds anything truthy
    pub fn has(&self, key: &str) -> bool {
        self.value.get(key).map(fields::is_truthy).unwrap_or(false)
    }
}
