//! errors.rs - Custom error types for the saringan-core library.
//!
//! This module defines a structured error enum for the library. Loading and
//! compiling a lexicon can fail; the four filter operations never do.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `saringan-core` library.
///
/// New variants may be added in future versions, hence `#[non_exhaustive]`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SaringanError {
    #[error("Failed to compile lexicon term '{0}': {1}")]
    TermCompilationError(String, regex::Error),

    #[error("Term '{0}': length ({1}) exceeds maximum allowed ({2})")]
    TermLengthExceeded(String, usize, usize),

    #[error("Lexicon validation failed:\n{0}")]
    InvalidLexicon(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
