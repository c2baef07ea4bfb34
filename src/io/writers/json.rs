use crate::errors::Result;
use crate::io::output::OutputWriter;
use crate::metrics::CorpusSummary;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// The summary as written to disk: the corpus statistics plus the location
/// of the companion metrics table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    #[serde(flatten)]
    pub summary: CorpusSummary,
    pub csv_file_name: String,
}

impl SummaryReport {
    pub fn new(summary: CorpusSummary, csv_path: &Path) -> Self {
        Self {
            summary,
            csv_file_name: csv_path.display().to_string(),
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter<SummaryReport> for JsonWriter<W> {
    fn write_results(&mut self, results: &SummaryReport) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.writer, formatter);
        results.serialize(&mut serializer)?;
        self.writer.flush()?;
        Ok(())
    }
}
