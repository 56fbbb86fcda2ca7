//! Terminal presentation: theme handling, colored messages and summary tables.

pub mod output_format;
pub mod summary;
pub mod theme;
