//! Human- and machine-readable rendering of search results.
pub mod report;

pub use report::{format_json, format_text, CycleReport};
