//! `saringan lexicon`: list the effective lexicon categories.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use saringan_core::LexiconConfig;

use crate::ui::summary;
use crate::ui::theme::ThemeMap;

pub fn run_lexicon(lexicon: &LexiconConfig, theme: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    summary::print_lexicon(lexicon, &mut stdout.lock(), theme, supports_color)?;
    Ok(())
}
