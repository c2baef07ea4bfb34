use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a UTF-8 text file into lines with their terminators removed.
///
/// Only the line break is dropped (see [`split_lines`]); other surrounding
/// whitespace is left for the caller. A missing file is reported as
/// [`Error::SourceNotFound`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::source_not_found(path));
    }
    let content = fs::read_to_string(path)?;
    let lines = split_lines(&content);
    log::info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split on `\n`, `\r\n` or a lone `\r`. A trailing break does not start
/// another line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + break_len..];
            }
            None => {
                lines.push(rest.to_string());
                rest = "";
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.is_source_not_found());
    }

    #[test]
    fn test_reads_lines_without_terminators() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("got.txt");
        fs::write(&path, "Winter is coming.\r\n  Hodor  \n\nlast").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["Winter is coming.", "  Hodor  ", "", "last"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(split_lines("one\ntwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_lone_carriage_return_breaks_lines() {
        assert_eq!(split_lines("one\rtwo\r"), vec!["one", "two"]);
        assert_eq!(split_lines("a\r\rb\r\nc\n"), vec!["a", "", "b", "c"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, b"\xff\xfe\x00").unwrap();
        assert!(matches!(read_lines(&path).unwrap_err(), Error::Io(_)));
    }
}
