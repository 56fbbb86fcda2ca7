//! Tables for match summaries, scan reports and lexicon listings.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::{self, Write};

use saringan_core::{LexiconConfig, MatchSummaryItem, ScanReport};

use crate::ui::output_format::write_styled;
use crate::ui::theme::{table_color_for, ThemeEntry, ThemeMap};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Builds a cell, colored from `entry` when `supports_color` is set.
fn styled_cell<T: ToString>(content: T, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> Cell {
    let cell = Cell::new(content);
    match table_color_for(theme, entry) {
        Some(color) if supports_color => cell.fg(color),
        _ => cell,
    }
}

fn enforce_color(table: &mut Table, supports_color: bool) {
    if supports_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

fn print_title<W: Write + ?Sized>(writer: &mut W, title: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    write_styled(writer, title, ThemeEntry::Header, theme, supports_color)?;
    writeln!(writer)
}

/// Prints one row per matched term. Nothing is printed for an empty summary besides a note.
pub fn print_summary<W: Write + ?Sized>(
    summary: &[MatchSummaryItem],
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_title(writer, "Filter Summary:", theme, supports_color)?;
    if summary.is_empty() {
        return writeln!(writer, "No blocked terms found.");
    }

    let mut table = new_table(vec!["Term", "Category", "Occurrences"]);
    enforce_color(&mut table, supports_color);
    for item in summary {
        table.add_row(vec![
            styled_cell(&item.term, ThemeEntry::SummaryTerm, theme, supports_color),
            Cell::new(&item.category),
            styled_cell(item.occurrences, ThemeEntry::SummaryOccurrences, theme, supports_color),
        ]);
    }
    writeln!(writer, "{table}")?;
    let total: usize = summary.iter().map(|i| i.occurrences).sum();
    writeln!(writer, "Total occurrences: {}", total)
}

pub fn print_scan_report<W: Write + ?Sized>(
    report: &ScanReport,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_title(writer, "Scan Report:", theme, supports_color)?;
    let mut table = new_table(vec!["Field", "Value"]);
    enforce_color(&mut table, supports_color);
    table.add_row(vec![Cell::new("contains"), Cell::new(report.contains)]);
    table.add_row(vec![
        Cell::new("count"),
        styled_cell(report.count, ThemeEntry::SummaryOccurrences, theme, supports_color),
    ]);
    table.add_row(vec![
        Cell::new("matches"),
        styled_cell(report.matches.join(", "), ThemeEntry::SummaryTerm, theme, supports_color),
    ]);
    writeln!(writer, "{table}")
}

pub fn print_lexicon<W: Write + ?Sized>(
    lexicon: &LexiconConfig,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_title(writer, "Lexicon Categories:", theme, supports_color)?;
    let mut table = new_table(vec!["Category", "Terms", "Enabled", "Opt-in", "Description"]);
    enforce_color(&mut table, supports_color);
    for category in &lexicon.categories {
        table.add_row(vec![
            styled_cell(&category.name, ThemeEntry::SummaryTerm, theme, supports_color),
            styled_cell(category.terms.len(), ThemeEntry::SummaryOccurrences, theme, supports_color),
            Cell::new(category.enabled != Some(false)),
            Cell::new(category.opt_in),
            Cell::new(category.description.as_deref().unwrap_or("")),
        ]);
    }
    writeln!(writer, "{table}")?;
    writeln!(writer, "Combined lexicon size: {}", lexicon.combined_terms().len())
}
