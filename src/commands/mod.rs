//! CLI command implementations.
//!
//! textmetrics has a single command: analyze one text file and write its
//! metrics table and summary.

pub mod analyze;

pub use analyze::{handle_analyze, process_files, AnalyzeConfig, AnalyzeOutcome};
