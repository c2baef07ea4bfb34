use anyhow::Result;
use textmetrics::cli::{self, CliAction};
use textmetrics::commands::{handle_analyze, AnalyzeConfig};

// Main orchestrator function
fn main() -> Result<()> {
    init_logging();

    match cli::parse_args() {
        CliAction::Analyze(args) => {
            let config = textmetrics::load_config();
            handle_analyze(AnalyzeConfig::new(args.input, config))
        }
        CliAction::Usage => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        CliAction::Display(text) => {
            print!("{}", text);
            Ok(())
        }
    }
}

// Side effect: logging goes to stderr, `warn` unless RUST_LOG says otherwise
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
