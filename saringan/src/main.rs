//! Saringan entry point.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::info;
use std::io;
use std::process::ExitCode;

use saringan::cli::{Cli, Commands};
use saringan::commands::{self, filter, lexicon, scan};
use saringan::logger;
use saringan::ui::output_format;
use saringan::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use saringan_core::{validate_lexicon, LexiconEngine};

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));
    info!("saringan started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme = match build_theme_map(args.theme.as_deref()).context("Theme error") {
        Ok(theme) => theme,
        Err(e) => return report_error(&e, &ThemeStyle::default_theme_map()),
    };

    match run(args, &theme) {
        Ok(code) => code,
        Err(e) => report_error(&e, &theme),
    }
}

fn report_error(err: &anyhow::Error, theme: &ThemeMap) -> ExitCode {
    let stderr = io::stderr();
    let supports_color = stderr.is_terminal();
    // Nothing left to report to if stderr itself is gone.
    let _ = output_format::print_error_message(&mut stderr.lock(), &format!("{:#}", err), theme, supports_color);
    ExitCode::FAILURE
}

fn run(args: Cli, theme: &ThemeMap) -> Result<ExitCode> {
    match args.command {
        Commands::Filter(cmd) => {
            let mut lexicon_config = commands::build_lexicon(&cmd.lexicon)?;
            if let Some(mask_char) = cmd.mask_char {
                lexicon_config.masking.mask_char = Some(mask_char);
                validate_lexicon(&lexicon_config)?;
            }
            let engine = LexiconEngine::new(lexicon_config)?;

            if cmd.line_buffered {
                let stdin = io::stdin();
                let stdout = io::stdout();
                filter::run_filter_line_buffered(&engine, stdin.lock(), &mut stdout.lock())?;
            } else {
                let input = commands::read_input(cmd.input_file.as_deref())?;
                let opts = filter::FilterOptions {
                    input,
                    output_path: cmd.output,
                    no_summary: cmd.no_summary,
                    quiet: args.quiet,
                };
                filter::run_filter(&engine, opts, theme)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Scan(cmd) => {
            let engine = LexiconEngine::new(commands::build_lexicon(&cmd.lexicon)?)?;
            let input = commands::read_input(cmd.input_file.as_deref())?;
            let dirty = scan::run_scan_to_stdout(&engine, &input, cmd.json, theme)?;
            if dirty && cmd.fail_on_match {
                if !args.quiet {
                    let stderr = io::stderr();
                    let supports_color = stderr.is_terminal();
                    output_format::print_warn_message(
                        &mut stderr.lock(),
                        "Blocked terms found; exiting with status 1.",
                        theme,
                        supports_color,
                    )?;
                }
                return Ok(ExitCode::from(1));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lexicon(cmd) => {
            let lexicon_config = commands::build_lexicon(&cmd.lexicon)?;
            lexicon::run_lexicon(&lexicon_config, theme)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
