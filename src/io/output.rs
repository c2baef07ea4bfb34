use crate::errors::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// A sink for one kind of analysis result.
pub trait OutputWriter<T: ?Sized> {
    fn write_results(&mut self, results: &T) -> Result<()>;
}

/// Open (create or truncate) `path` for buffered writing.
pub fn create_file_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    log::debug!("Opened {} for writing", path.display());
    Ok(BufWriter::new(file))
}
