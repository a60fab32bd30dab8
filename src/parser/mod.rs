//! Parsing modules for snapshots, captured sessions and record fields

pub mod fields;
pub mod session;
pub mod snapshot;

pub use session::{latest_farm, SessionKind, SessionRecord};
pub use snapshot::{parse_snapshot, parse_snapshot_from_file};
