//! `saringan filter`: mask blocked terms and write the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use saringan_core::FilterEngine;

use crate::ui::output_format;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

pub struct FilterOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

pub fn run_filter(engine: &dyn FilterEngine, opts: FilterOptions, theme: &ThemeMap) -> Result<()> {
    info!("Starting filter operation.");

    let filtered = engine.redact(&opts.input);
    debug!(
        "Content filtered. Original length: {}, filtered length: {}",
        opts.input.len(),
        filtered.len()
    );

    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                let stderr_color = io::stderr().is_terminal();
                let msg = format!("Writing filtered content to file: {}", path.display());
                output_format::print_info_message(&mut io::stderr(), &msg, theme, stderr_color)
                    .context("Failed to write to stderr")?;
            }
            fs::write(path, &filtered)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(filtered.as_bytes())?;
            writer.flush()?;
        }
    }

    if !opts.no_summary && !opts.quiet {
        let report = engine.summarize(&opts.input);
        let stderr_color = io::stderr().is_terminal();
        summary::print_summary(&report, &mut io::stderr(), theme, stderr_color)?;
    }

    info!("Filter operation completed.");
    Ok(())
}

/// Filters `reader` line by line, flushing after every line so piped chat streams see
/// output immediately. Line endings are preserved. Returns the number of lines processed.
pub fn run_filter_line_buffered<R: BufRead, W: Write>(
    engine: &dyn FilterEngine,
    mut reader: R,
    writer: &mut W,
) -> Result<usize> {
    info!("Starting line-buffered filter operation.");
    let mut line = String::new();
    let mut lines = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        writer.write_all(engine.redact(&line).as_bytes())?;
        writer.flush()?;
        lines += 1;
    }

    debug!("Line-buffered filter processed {} lines.", lines);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saringan_core::filter::default_engine;
    use std::io::Cursor;

    #[test]
    fn line_buffered_filter_preserves_line_endings() {
        let engine = default_engine().unwrap();
        let input = Cursor::new("halo semua\r\ndasar babi\ntanpa newline bangsat");
        let mut out = Vec::new();
        let lines = run_filter_line_buffered(engine, input, &mut out).unwrap();
        assert_eq!(lines, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "halo semua\r\ndasar ***i\ntanpa newline ***gsat"
        );
    }
}
