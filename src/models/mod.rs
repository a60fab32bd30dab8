//! Core data models for timer derivation

pub mod snapshot;
pub mod timer;
pub mod suggestion;
pub mod report;
pub mod tables;

pub use snapshot::*;
pub use timer::*;
pub use suggestion::*;
pub use report::*;
pub use tables::*;
