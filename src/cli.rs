use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: textmetrics <INPUT>";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "textmetrics")]
#[command(
    about = "Per-line and document-level lexical statistics for a text file",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Text file to analyze
    pub input: PathBuf,
}

/// What the binary should do after looking at its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Analyze(Cli),
    /// Wrong number of arguments: print the usage line and stop.
    Usage,
    /// `--help` or `--version` output, printed verbatim.
    Display(String),
}

pub fn parse_args() -> CliAction {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> CliAction
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => CliAction::Analyze(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliAction::Display(e.to_string()),
            _ => {
                log::debug!("Argument error: {}", e);
                CliAction::Usage
            }
        },
    }
}
