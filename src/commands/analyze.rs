//! The `textmetrics <INPUT>` pipeline: read, measure, summarize, write.

use crate::config::{OutputConfig, TextMetricsConfig};
use crate::errors::Result;
use crate::io::{self, CsvWriter, JsonWriter, OutputWriter, SummaryReport};
use crate::metrics::{calculate_document_metrics, calculate_summary};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub output: OutputConfig,
}

impl AnalyzeConfig {
    pub fn new(input: PathBuf, config: TextMetricsConfig) -> Self {
        Self {
            input,
            output: config.output,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// Both reports were written.
    Written {
        lines: usize,
        csv_path: PathBuf,
        json_path: PathBuf,
    },
    /// The input had no lines; nothing was written.
    EmptyInput,
}

/// Run the whole pipeline for one input file.
///
/// A missing input surfaces as `SourceNotFound` before any file is written.
/// An input without lines is a no-op.
pub fn process_files(input: &Path, output: &OutputConfig) -> Result<AnalyzeOutcome> {
    let lines = io::read_lines(input)?;
    if lines.is_empty() {
        log::info!("{} has no lines; nothing to write", input.display());
        return Ok(AnalyzeOutcome::EmptyInput);
    }

    let csv_path = output.csv_path();
    let json_path = output.json_path();

    let line_metrics = calculate_document_metrics(&lines);
    CsvWriter::new(io::create_file_writer(&csv_path)?).write_results(line_metrics.as_slice())?;
    log::info!("Wrote {} rows to {}", line_metrics.len(), csv_path.display());

    let summary = calculate_summary(&lines, &line_metrics)?;
    let report = SummaryReport::new(summary, &csv_path);
    JsonWriter::new(io::create_file_writer(&json_path)?).write_results(&report)?;
    log::info!("Wrote summary to {}", json_path.display());

    Ok(AnalyzeOutcome::Written {
        lines: lines.len(),
        csv_path,
        json_path,
    })
}

/// Entry point used by the binary.
///
/// The output directory is created up front. A missing input file is
/// reported on stderr and is not treated as a failure of the command.
pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    config.output.ensure_directory().with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output.directory.display()
        )
    })?;

    match process_files(&config.input, &config.output) {
        Ok(_) => Ok(()),
        Err(e) if e.is_source_not_found() => {
            eprintln!("{}", e);
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to analyze {}", config.input.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::TempDir;

    fn output_in(dir: &Path) -> OutputConfig {
        OutputConfig {
            directory: dir.join("output"),
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = output_in(dir.path());
        output.ensure_directory().unwrap();

        let err = process_files(&dir.path().join("missing.txt"), &output).unwrap_err();

        assert!(matches!(err, Error::SourceNotFound { .. }));
        assert!(!output.csv_path().exists());
        assert!(!output.json_path().exists());
    }

    #[test]
    fn test_empty_input_is_noop() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.txt");
        std::fs::write(&input, "").unwrap();
        let output = output_in(dir.path());
        output.ensure_directory().unwrap();

        assert_eq!(process_files(&input, &output).unwrap(), AnalyzeOutcome::EmptyInput);
        assert!(!output.csv_path().exists());
        assert!(!output.json_path().exists());
    }

    #[test]
    fn test_writes_both_reports() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("got.txt");
        std::fs::write(&input, "a a\nb\n").unwrap();
        let output = output_in(dir.path());
        output.ensure_directory().unwrap();

        let outcome = process_files(&input, &output).unwrap();

        assert_eq!(
            outcome,
            AnalyzeOutcome::Written {
                lines: 2,
                csv_path: output.csv_path(),
                json_path: output.json_path(),
            }
        );
        let csv = std::fs::read_to_string(output.csv_path()).unwrap();
        assert_eq!(csv.lines().count(), 3);
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output.json_path()).unwrap()).unwrap();
        assert_eq!(json["most_frequent_word"], "a");
        assert_eq!(
            json["csv_file_name"],
            output.csv_path().display().to_string()
        );
    }

    #[test]
    fn test_handle_analyze_swallows_missing_source() {
        let dir = TempDir::new().unwrap();
        let config = AnalyzeConfig {
            input: dir.path().join("missing.txt"),
            output: output_in(dir.path()),
        };

        assert!(handle_analyze(config).is_ok());
        assert!(dir.path().join("output").is_dir());
        assert!(!dir.path().join("output").join("got.csv").exists());
    }
}
