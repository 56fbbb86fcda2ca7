// saringan-core/src/lib.rs
//! # Saringan Core Library
//!
//! `saringan-core` detects and redacts profanity in free text across several lexicon
//! categories: Indonesian, English, Javanese, abbreviations and leetspeak variants.
//!
//! The library is pure: it performs no I/O at match time and keeps no mutable state.
//! The built-in lexicon is compiled once per process and shared read-only.
//!
//! ## Modules
//!
//! * `config`: `LexiconConfig`, `LexiconCategory` and masking settings; YAML loading and merging.
//! * `matcher`: term compilation and caching, the whole-word rule, and the masking rule.
//! * `engine`: the `FilterEngine` trait.
//! * `engines`: concrete engines (`LexiconEngine`).
//! * `term_match`: match, summary and report types.
//! * `filter`: one-shot helpers over the built-in lexicon.
//! * `errors`: the `SaringanError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use saringan_core::filter;
//!
//! assert_eq!(filter::redact("Dasar anjing!").as_deref(), Some("Dasar ***ing!"));
//! assert!(filter::contains("ANJING"));
//! assert!(!filter::contains("Beli asuransi perjalanan"));
//! assert_eq!(filter::count("babi babi tolol"), 3);
//! assert_eq!(filter::list_matches("babi babi"), vec!["babi".to_string()]);
//! ```
//!
//! With a custom lexicon:
//!
//! ```rust
//! use saringan_core::{merge_lexicons, FilterEngine, LexiconCategory, LexiconConfig, LexiconEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let user = LexiconConfig {
//!         categories: vec![LexiconCategory {
//!             name: "forum".to_string(),
//!             terms: vec!["spammer".to_string()],
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     };
//!     let config = merge_lexicons(LexiconConfig::load_default_lexicon()?, Some(user));
//!     let engine = LexiconEngine::new(config)?;
//!     assert_eq!(engine.redact("dasar Spammer"), "dasar ***mmer");
//!     Ok(())
//! }
//! ```
//!
//! ## Non-properties
//!
//! `redact` is not idempotent. Terms are applied sequentially and a later term may match
//! inside text an earlier term already masked.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter;
pub mod matcher;
pub mod term_match;

/// Re-exports the lexicon configuration types and helpers.
pub use config::{
    canonical_term,
    merge_lexicons,
    validate_lexicon,
    EngineOptions,
    LexiconCategory,
    LexiconConfig,
    LexiconTerm,
    MaskingConfig,
    MAX_TERM_LENGTH,
};

/// Re-exports the custom error type.
pub use errors::SaringanError;

/// Re-exports the engine trait and its concrete implementation.
pub use engine::FilterEngine;
pub use engines::lexicon_engine::LexiconEngine;

/// Re-exports match and report types.
pub use term_match::{MatchSummaryItem, ScanReport, TermMatch};

/// Re-exports the compiler entry points for advanced usage.
pub use matcher::compiler::{compile_terms, get_or_compile_lexicon, CompiledLexicon, CompiledTerm};
