use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".textmetrics.toml";

/// Where the metrics table and the summary are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory unless absolute
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name of the per-line metrics table
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// File name of the document summary
    #[serde(default = "default_json_file")]
    pub json_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            csv_file: default_csv_file(),
            json_file: default_json_file(),
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.directory.join(&self.csv_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.directory.join(&self.json_file)
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_directory(&self) -> Result<()> {
        crate::io::ensure_dir(&self.directory)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        validate_file_name(&self.csv_file, "csv_file")?;
        validate_file_name(&self.json_file, "json_file")?;
        if self.csv_file == self.json_file {
            return Err("csv_file and json_file must differ".to_string());
        }
        Ok(())
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("output")
}

fn default_csv_file() -> String {
    "got.csv".to_string()
}

fn default_json_file() -> String {
    "got.json".to_string()
}

// Pure function: a bare, non-empty file name
fn validate_file_name(name: &str, field: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!("{} must be a file name, not a path: {}", field, name));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetricsConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parse `.textmetrics.toml` contents and check the output names.
pub fn parse_and_validate_config(contents: &str) -> Result<TextMetricsConfig> {
    let config = toml::from_str::<TextMetricsConfig>(contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.output.validate().map_err(Error::Config)?;
    Ok(config)
}

/// `Ok(None)` when there is no file at `path`; a file that exists but cannot
/// be read or does not validate is an error.
pub(crate) fn load_config_file(path: &Path) -> Result<Option<TextMetricsConfig>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::Config(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };
    parse_and_validate_config(&contents).map(Some)
}

/// Load `.textmetrics.toml` from `dir`, falling back to defaults.
pub fn load_config_from_dir(dir: &Path) -> TextMetricsConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    match load_config_file(&path) {
        Ok(Some(config)) => {
            log::debug!("Using output settings from {}", path.display());
            config
        }
        Ok(None) => TextMetricsConfig::default(),
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_FILE_NAME, e);
            TextMetricsConfig::default()
        }
    }
}

/// Load configuration from the current working directory.
pub fn load_config() -> TextMetricsConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(&dir),
        Err(e) => {
            log::warn!("No working directory ({}); output settings are defaults", e);
            TextMetricsConfig::default()
        }
    }
}
