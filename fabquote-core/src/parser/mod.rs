//! Lenient decoding of persisted estimate and settings records.

mod document;

pub use document::{load_estimate_file, load_settings_file, parse_document};
