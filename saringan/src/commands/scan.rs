//! `saringan scan`: report on blocked terms without modifying the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use saringan_core::FilterEngine;

use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Writes the scan report to `writer` and returns whether the input contains a blocked term.
pub fn run_scan<W: Write>(
    engine: &dyn FilterEngine,
    input: &str,
    json: bool,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> Result<bool> {
    info!("Starting scan operation.");
    let report = engine.scan(input);

    if json {
        let body = report.to_json().context("Failed to serialize scan report")?;
        writeln!(writer, "{}", body)?;
    } else {
        summary::print_scan_report(&report, writer, theme, supports_color)?;
    }

    info!("Scan found {} occurrence(s).", report.count);
    Ok(report.contains)
}

/// Runs the scan against stdout.
pub fn run_scan_to_stdout(engine: &dyn FilterEngine, input: &str, json: bool, theme: &ThemeMap) -> Result<bool> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    run_scan(engine, input, json, &mut writer, theme, supports_color)
}
