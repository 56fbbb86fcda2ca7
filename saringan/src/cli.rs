//! Command-line interface definition for `saringan`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "saringan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter profanity out of forum comments and chat messages",
    long_about = "Saringan detects and masks blocked terms (Indonesian, English, Javanese, \
                  abbreviations and leetspeak) using whole-word, case-insensitive matching.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output and the filter summary.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, env = "SARINGAN_THEME")]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks blocked terms in the input and writes the result.
    Filter(FilterCommand),

    /// Reports whether the input contains blocked terms, how many, and which ones.
    Scan(ScanCommand),

    /// Lists the lexicon categories.
    Lexicon(LexiconCommand),
}

/// Lexicon selection shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct LexiconArgs {
    /// YAML lexicon merged over the built-in one.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable opt-in categories (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',')]
    pub enable: Vec<String>,

    /// Disable categories (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',')]
    pub disable: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FilterCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Character used for masking.
    #[arg(long = "mask-char", value_name = "CHAR")]
    pub mask_char: Option<char>,

    /// Do not print the filter summary.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Process stdin line by line, flushing each line (no summary).
    #[arg(long = "line-buffered", conflicts_with_all = ["input_file", "output"])]
    pub line_buffered: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when a blocked term is found.
    #[arg(long = "fail-on-match")]
    pub fail_on_match: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

#[derive(Args, Debug)]
pub struct LexiconCommand {
    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_separated_categories() {
        let cli = Cli::parse_from(["saringan", "scan", "-x", "english,javanese", "--json"]);
        match cli.command {
            Commands::Scan(scan) => {
                assert!(scan.json);
                assert_eq!(scan.lexicon.disable, vec!["english", "javanese"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
