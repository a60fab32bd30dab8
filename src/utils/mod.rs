//! Utility functions

pub mod helpers;
pub mod time_format;

pub use helpers::*;
pub use time_format::format_duration;
