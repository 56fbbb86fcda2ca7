//! Module for managing the CLI color theme.
//!
//! Each logical output element maps to an optional 16-color ANSI foreground. Themes can
//! be loaded from a YAML file; entries the file leaves out fall back to the defaults.

use anyhow::{Context, Result};
use comfy_table::Color as TableColor;
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Type alias for the theme map.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    Info,
    Warn,
    Error,
    /// Term or category names in tables.
    SummaryTerm,
    /// Occurrence counts in tables.
    SummaryOccurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 6] = [
        ThemeEntry::Header,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::SummaryTerm,
        ThemeEntry::SummaryOccurrences,
    ];
}

/// A named ANSI color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white"
            | "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue"
            | "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    /// The same color in comfy-table's palette, for styling table cells.
    pub fn to_table_color(&self) -> TableColor {
        match self.to_ansi_color() {
            AnsiColors::Black => TableColor::Black,
            AnsiColors::Red => TableColor::DarkRed,
            AnsiColors::Green => TableColor::DarkGreen,
            AnsiColors::Yellow => TableColor::DarkYellow,
            AnsiColors::Blue => TableColor::DarkBlue,
            AnsiColors::Magenta => TableColor::DarkMagenta,
            AnsiColors::Cyan => TableColor::DarkCyan,
            AnsiColors::BrightBlack => TableColor::DarkGrey,
            AnsiColors::BrightRed => TableColor::Red,
            AnsiColors::BrightGreen => TableColor::Green,
            AnsiColors::BrightYellow => TableColor::Yellow,
            AnsiColors::BrightBlue => TableColor::Blue,
            AnsiColors::BrightMagenta => TableColor::Magenta,
            AnsiColors::BrightCyan => TableColor::Cyan,
            AnsiColors::BrightWhite => TableColor::White,
            _ => TableColor::Grey,
        }
    }

    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Style for a single `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

fn named(color: &str) -> ThemeStyle {
    ThemeStyle {
        fg: Some(ThemeColor::Named(color.to_string())),
    }
}

/// Loads a theme from `theme_path`, or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

/// Resolves the ANSI color for `entry`, defaulting to white.
pub fn color_for(theme: &ThemeMap, entry: ThemeEntry) -> AnsiColors {
    theme
        .get(&entry)
        .and_then(|style| style.fg.as_ref())
        .map(ThemeColor::to_ansi_color)
        .unwrap_or(AnsiColors::White)
}

/// Resolves the table cell color for `entry`, or `None` when the theme leaves it unset.
pub fn table_color_for(theme: &ThemeMap, entry: ThemeEntry) -> Option<TableColor> {
    theme
        .get(&entry)
        .and_then(|style| style.fg.as_ref())
        .map(ThemeColor::to_table_color)
}

impl ThemeStyle {
    /// Loads a YAML theme file and fills missing entries from the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, named("brightcyan"));
        default_theme.insert(ThemeEntry::Info, named("white"));
        default_theme.insert(ThemeEntry::Warn, named("yellow"));
        default_theme.insert(ThemeEntry::Error, named("red"));
        default_theme.insert(ThemeEntry::SummaryTerm, named("magenta"));
        default_theme.insert(ThemeEntry::SummaryOccurrences, named("brightwhite"));
        default_theme
    }
}
