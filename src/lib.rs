// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod metrics;

// Re-export commonly used types
pub use crate::errors::{Error, Result};

pub use crate::metrics::{
    calculate_document_metrics, calculate_line_metrics, calculate_summary, CorpusSummary,
    FrequencyTable, LineMetrics,
};

pub use crate::io::{read_lines, CsvWriter, JsonWriter, OutputWriter, SummaryReport};

pub use crate::commands::{process_files, AnalyzeOutcome};

pub use crate::config::{load_config, OutputConfig, TextMetricsConfig};
