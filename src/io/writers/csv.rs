//! Per-line metrics table in comma-separated form.
//!
//! One header row naming the eight fields, then one row per input line.
//! Rows end with `\r\n` so spreadsheet tools open the file cleanly.

use crate::errors::{Error, Result};
use crate::io::output::OutputWriter;
use crate::metrics::LineMetrics;
use std::io::Write;

const LINE_TERMINATOR: &str = "\r\n";

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<()> {
        write!(self.writer, "{}{}", LineMetrics::FIELDS.join(","), LINE_TERMINATOR)?;
        Ok(())
    }

    fn write_row(&mut self, metrics: &LineMetrics) -> Result<()> {
        write!(
            self.writer,
            "{},{},{},{},{},{},{},{}{}",
            metrics.number_of_terms,
            metrics.number_of_signs,
            metrics.number_of_prepositions,
            format_average_vowels(metrics),
            metrics.max_length,
            metrics.min_length,
            metrics.total_length,
            metrics.length_without_spaces,
            LINE_TERMINATOR
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter<[LineMetrics]> for CsvWriter<W> {
    fn write_results(&mut self, results: &[LineMetrics]) -> Result<()> {
        self.write_header()?;
        for metrics in results {
            self.write_row(metrics)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// `0` for a line without tokens, otherwise the shortest round-trip float
/// form (always with a decimal point, e.g. `2.0`).
pub fn format_average_vowels(metrics: &LineMetrics) -> String {
    if metrics.has_terms() {
        format!("{:?}", metrics.average_vowels)
    } else {
        "0".to_string()
    }
}

/// Parse a table produced by [`CsvWriter`] back into records.
pub fn parse_csv_rows(content: &str) -> Result<Vec<LineMetrics>> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::InvalidInput("missing CSV header".to_string()))?;
    if header != LineMetrics::FIELDS.join(",") {
        return Err(Error::InvalidInput(format!("unexpected CSV header: {header}")));
    }

    lines
        .enumerate()
        .map(|(index, line)| parse_row(line).map_err(|e| row_error(index + 2, e)))
        .collect()
}

fn parse_row(line: &str) -> std::result::Result<LineMetrics, String> {
    let cells: Vec<&str> = line.split(',').collect();
    if cells.len() != LineMetrics::FIELDS.len() {
        return Err(format!(
            "expected {} columns, found {}",
            LineMetrics::FIELDS.len(),
            cells.len()
        ));
    }

    let count = |i: usize| -> std::result::Result<usize, String> {
        cells[i]
            .parse::<usize>()
            .map_err(|e| format!("{}: {e}", LineMetrics::FIELDS[i]))
    };

    Ok(LineMetrics {
        number_of_terms: count(0)?,
        number_of_signs: count(1)?,
        number_of_prepositions: count(2)?,
        average_vowels: cells[3]
            .parse::<f64>()
            .map_err(|e| format!("average_vowels: {e}"))?,
        max_length: count(4)?,
        min_length: count(5)?,
        total_length: count(6)?,
        length_without_spaces: count(7)?,
    })
}

fn row_error(row: usize, message: String) -> Error {
    Error::InvalidInput(format!("CSV row {row}: {message}"))
}
