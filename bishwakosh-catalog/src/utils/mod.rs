//! Utility modules

pub mod collation;
pub mod log_sanitizer;

pub use collation::{collation_key, locale_compare};
pub use log_sanitizer::truncate_for_log;
