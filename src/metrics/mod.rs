//! Metrics calculation module
//!
//! Per-line statistics, corpus aggregation and the shared tokenizer they
//! both build on.

pub mod frequency;
pub mod line;
pub mod summary;
pub mod tokenizer;

pub use frequency::FrequencyTable;
pub use line::{calculate_document_metrics, calculate_line_metrics, LineMetrics};
pub use summary::{calculate_summary, mean, sample_variance, CorpusFrequencies, CorpusSummary};
pub use tokenizer::{count_signs, tokenize, PREPOSITIONS, VOWELS};
