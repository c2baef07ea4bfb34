pub mod output;
pub mod reader;
pub mod writers;

pub use output::{create_file_writer, OutputWriter};
pub use reader::read_lines;
pub use writers::{CsvWriter, JsonWriter, SummaryReport};

use crate::errors::Result;
use std::fs;
use std::path::Path;

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        log::debug!("Created output directory {}", path.display());
    }
    Ok(())
}
