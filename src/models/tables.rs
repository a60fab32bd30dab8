//! Growth, respawn and value tables
//!
//! These are reference data from the game, not derived logic. The built-in
//! copy is embedded from `data/duration_tables.json`; callers can load their
//! own file or build the struct directly to override any of it.

use crate::error::{FarmTimerError, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

lazy_static! {
    static ref BUILTIN_TABLES: DurationTables = DurationTables::load();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DurationTables {
    pub crops: CropTiers,
    pub default_crop_seconds: u64,
    pub fruits: BTreeMap<String, u64>,
    pub default_fruit_seconds: u64,
    pub beehive_cycle_seconds: u64,
    pub respawn: RespawnTable,
    pub fruit_values: BTreeMap<String, f64>,
    pub default_fruit_value: f64,
}

/// Crop name → growth seconds, split by difficulty tier.
///
/// Lookups search `basic`, then `medium`, then `advanced`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropTiers {
    pub basic: BTreeMap<String, u64>,
    pub medium: BTreeMap<String, u64>,
    pub advanced: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespawnTable {
    pub stone: u64,
    pub wood: u64,
    pub iron: u64,
    pub gold: u64,
}

impl Default for RespawnTable {
    fn default() -> Self {
        Self {
            stone: 2 * 3600,
            wood: 2 * 3600,
            iron: 4 * 3600,
            gold: 8 * 3600,
        }
    }
}

/// Kinds of node that respawn after being mined or chopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Stone,
    Wood,
    Iron,
    Gold,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Stone,
        ResourceKind::Wood,
        ResourceKind::Iron,
        ResourceKind::Gold,
    ];

    /// Snapshot categories holding nodes of this kind
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Stone => &["stones"],
            ResourceKind::Wood => &["wood", "trees"],
            ResourceKind::Iron => &["iron"],
            ResourceKind::Gold => &["gold"],
        }
    }

    /// Field recording when the node was last harvested
    pub fn harvested_field(self) -> &'static str {
        match self {
            ResourceKind::Wood => "choppedAt",
            _ => "minedAt",
        }
    }

    /// Material sub-object some snapshot versions nest the timestamp under
    pub fn material_key(self) -> &'static str {
        match self {
            ResourceKind::Wood => "wood",
            _ => "stone",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ResourceKind::Stone => "stone",
            ResourceKind::Wood => "wood",
            ResourceKind::Iron => "iron",
            ResourceKind::Gold => "gold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Stone => "Stone",
            ResourceKind::Wood => "Wood",
            ResourceKind::Iron => "Iron",
            ResourceKind::Gold => "Gold",
        }
    }
}

impl DurationTables {
    /// Shared built-in tables
    pub fn builtin() -> &'static DurationTables {
        &BUILTIN_TABLES
    }

    /// Load from embedded JSON or fall back to the hard-coded copy
    fn load() -> Self {
        match Self::load_embedded() {
            Ok(tables) => tables,
            Err(e) => {
                tracing::warn!(error = %e, "could not parse embedded duration tables, using fallback");
                Self::create_fallback()
            }
        }
    }

    fn load_embedded() -> std::result::Result<Self, serde_json::Error> {
        let json = include_str!("../../data/duration_tables.json");
        serde_json::from_str(json)
    }

    fn create_fallback() -> Self {
        let seconds = |pairs: &[(&str, u64)]| -> BTreeMap<String, u64> {
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
        };

        Self {
            crops: CropTiers {
                basic: seconds(&[
                    ("Sunflower", 60),
                    ("Potato", 300),
                    ("Rhubarb", 600),
                    ("Pumpkin", 1800),
                    ("Carrot", 3600),
                    ("Cabbage", 7200),
                    ("Beetroot", 14400),
                    ("Cauliflower", 28800),
                    ("Parsnip", 43200),
                    ("Radish", 86400),
                    ("Wheat", 86400),
                ]),
                medium: seconds(&[
                    ("Zucchini", 1800),
                    ("Yam", 3600),
                    ("Broccoli", 7200),
                    ("Soybean", 10800),
                    ("Pepper", 14400),
                    ("Turnip", 86400),
                ]),
                advanced: seconds(&[
                    ("Eggplant", 57600),
                    ("Corn", 72000),
                    ("Onion", 72000),
                    ("Kale", 129600),
                    ("Artichoke", 129600),
                    ("Barley", 172800),
                    ("Rice", 115200),
                    ("Olive", 158400),
                ]),
            },
            default_crop_seconds: 3600,
            fruits: seconds(&[
                ("Apple", 24 * 3600),
                ("Orange", 36 * 3600),
                ("Blueberry", 6 * 3600),
                ("Banana", 12 * 3600),
            ]),
            default_fruit_seconds: 24 * 3600,
            beehive_cycle_seconds: 3600,
            respawn: RespawnTable::default(),
            fruit_values: [("Apple", 2.5), ("Orange", 3.0), ("Blueberry", 1.0), ("Banana", 1.5)]
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            default_fruit_value: 2.0,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| FarmTimerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| FarmTimerError::InvalidTables {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Growth duration of a crop; unknown names get the default
    pub fn crop_growth_millis(&self, name: &str) -> i64 {
        let seconds = [&self.crops.basic, &self.crops.medium, &self.crops.advanced]
            .iter()
            .find_map(|tier| tier.get(name).copied().filter(|s| *s > 0))
            .unwrap_or(self.default_crop_seconds);
        to_millis(seconds)
    }

    pub fn fruit_growth_millis(&self, name: &str) -> i64 {
        to_millis(self.fruits.get(name).copied().unwrap_or(self.default_fruit_seconds))
    }

    pub fn respawn_millis(&self, kind: ResourceKind) -> i64 {
        let seconds = match kind {
            ResourceKind::Stone => self.respawn.stone,
            ResourceKind::Wood => self.respawn.wood,
            ResourceKind::Iron => self.respawn.iron,
            ResourceKind::Gold => self.respawn.gold,
        };
        to_millis(seconds)
    }

    pub fn beehive_cycle_millis(&self) -> i64 {
        to_millis(self.beehive_cycle_seconds)
    }

    pub fn fruit_value(&self, name: &str) -> f64 {
        self.fruit_values
            .get(name)
            .copied()
            .unwrap_or(self.default_fruit_value)
    }
}

/// Table seconds as epoch-compatible millis, clamped to `i64::MAX`
fn to_millis(seconds: u64) -> i64 {
    i64::try_from(seconds.saturating_mul(1000)).unwrap_or(i64::MAX)
}

impl Default for DurationTables {
    fn default() -> Self {
        Self::create_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_matches_fallback() {
        assert_eq!(DurationTables::load_embedded().unwrap(), DurationTables::create_fallback());
    }

    #[test]
    fn test_crop_lookup_searches_tiers() {
        let tables = DurationTables::builtin();
        assert_eq!(tables.crop_growth_millis("Potato"), 300_000);
        assert_eq!(tables.crop_growth_millis("Pepper"), 14_400_000);
        assert_eq!(tables.crop_growth_millis("Kale"), 129_600_000);
        assert_eq!(tables.crop_growth_millis("Moonflower"), 3_600_000);
    }

    #[test]
    fn test_fruit_lookup_defaults() {
        let tables = DurationTables::builtin();
        assert_eq!(tables.fruit_growth_millis("Orange"), 36 * 3_600_000);
        assert_eq!(tables.fruit_growth_millis("Durian"), 24 * 3_600_000);
        assert_eq!(tables.fruit_value("Durian"), 2.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "respawn": {{ "gold": 60 }}, "defaultCropSeconds": 120 }}"#).unwrap();

        let tables = DurationTables::from_path(file.path()).unwrap();
        assert_eq!(tables.respawn_millis(ResourceKind::Gold), 60_000);
        assert_eq!(tables.respawn_millis(ResourceKind::Iron), 4 * 3_600_000);
        assert_eq!(tables.crop_growth_millis("Unknown"), 120_000);
        assert_eq!(tables.crop_growth_millis("Potato"), 300_000);
    }

    #[test]
    fn test_oversized_durations_clamp() {
        let tables = DurationTables::from_json_str(
            r#"{ "defaultCropSeconds": 20000000000000000, "beehiveCycleSeconds": 18446744073709551615 }"#,
        )
        .unwrap();
        assert_eq!(tables.crop_growth_millis("Unknown"), i64::MAX);
        assert_eq!(tables.beehive_cycle_millis(), i64::MAX);
        assert_eq!(tables.crop_growth_millis("Potato"), 300_000);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DurationTables::from_path(Path::new("/nonexistent/tables.json")).unwrap_err();
        assert!(matches!(err, FarmTimerError::Io { .. }));
    }
}
