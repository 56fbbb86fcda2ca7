//! Subcommand implementations and the helpers they share.

pub mod filter;
pub mod lexicon;
pub mod scan;

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Read;
use std::path::Path;

use saringan_core::{merge_lexicons, validate_lexicon, LexiconConfig};

use crate::cli::LexiconArgs;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the effective lexicon: defaults, merged user file, then category filtering.
pub fn build_lexicon(args: &LexiconArgs) -> Result<LexiconConfig> {
    let defaults = LexiconConfig::load_default_lexicon()?;
    let user = args
        .config
        .as_deref()
        .map(LexiconConfig::load_from_file)
        .transpose()
        .context("Failed to load user lexicon")?;

    let mut lexicon = merge_lexicons(defaults, user);
    lexicon.set_active_categories(&args.enable, &args.disable);
    validate_lexicon(&lexicon)?;
    debug!(
        "Effective lexicon: {} categories, {} terms.",
        lexicon.categories.len(),
        lexicon.combined_terms().len()
    );
    Ok(lexicon)
}
