use clap::{Args, Parser, Subcommand};
use knowledge_base::{DEFAULT_INSIGHTS_PATH, DisplayMode, INSIGHTS_PATH_ENV};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "code-insights",
    version,
    about = "Code Insights CLI",
    long_about = "Detects numeric-array library calls in source files and shows curated insights about them."
)]
pub struct InsightsCli {
    /// Knowledge base JSON file
    #[arg(long, global = true, env = INSIGHTS_PATH_ENV, default_value = DEFAULT_INSIGHTS_PATH)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl InsightsCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Args, Debug)]
pub struct PositionArgs {
    /// Source file to analyze
    pub file: PathBuf,

    /// Zero-based line index
    #[arg(short, long)]
    pub line: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical function key for a call on a line
    Resolve {
        #[command(flatten)]
        position: PositionArgs,

        /// Print `{"key": ...}` and exit successfully even when nothing resolves
        #[arg(long)]
        json: bool,
    },
    /// Print the hover insight for a line
    Hover {
        #[command(flatten)]
        position: PositionArgs,

        /// Word under the cursor, used when the line does not resolve
        #[arg(long)]
        word: Option<String>,
    },
    /// Print the side-panel entry for a function key
    Show {
        /// Canonical function key, e.g. np.random.shuffle
        key: String,

        /// Panel tab: learn, test or ai
        #[arg(long, default_value_t = DisplayMode::Learn)]
        mode: DisplayMode,
    },
    /// Start the insight server
    Server {
        /// Port to bind (defaults to the preferred port, or any free one)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        InsightsCli::command().debug_assert();
    }

    #[test]
    fn test_show_parses_mode() {
        let cli = InsightsCli::parse_from(["code-insights", "show", "np.arange", "--mode", "ai"]);
        match cli.command {
            Commands::Show { key, mode } => {
                assert_eq!(key, "np.arange");
                assert_eq!(mode, DisplayMode::Ai);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_parses_position() {
        let cli = InsightsCli::parse_from([
            "code-insights",
            "--data",
            "kb.json",
            "resolve",
            "script.py",
            "--line",
            "4",
        ]);
        assert_eq!(cli.data, PathBuf::from("kb.json"));
        match cli.command {
            Commands::Resolve { position, json } => {
                assert_eq!(position.file, PathBuf::from("script.py"));
                assert_eq!(position.line, 4);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result =
            InsightsCli::try_parse_from(["code-insights", "show", "np.arange", "--mode", "quiz"]);
        assert!(result.is_err());
    }
}
