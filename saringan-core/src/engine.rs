// saringan-core/src/engine.rs
//! Defines the core `FilterEngine` trait.
//!
//! The trait decouples callers (the CLI, a comment-submission handler, a chat pipeline)
//! from the concrete matching strategy. None of its operations can fail: matching runs
//! over an already-compiled lexicon and plain text.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{EngineOptions, LexiconConfig};
use crate::matcher::compiler::CompiledLexicon;
use crate::term_match::{MatchSummaryItem, ScanReport, TermMatch};

/// A trait that defines the core functionality of a filter engine.
pub trait FilterEngine: Send + Sync {
    /// Returns a redacted copy of `text`.
    ///
    /// Terms are applied one after another in lexicon order, each pass scanning the output
    /// of the previous one. Overlapping terms can therefore re-mask already masked text,
    /// and redacting twice is not guaranteed to be a no-op.
    fn redact(&self, text: &str) -> String;

    /// True iff at least one term occurs as a whole word.
    fn contains(&self, text: &str) -> bool;

    /// Total number of whole-word occurrences over all terms.
    fn count(&self, text: &str) -> usize;

    /// Distinct matching terms, in lexicon order.
    fn list_matches(&self, text: &str) -> Vec<String>;

    /// Every whole-word occurrence in `text`, sorted by start offset.
    fn find_matches(&self, text: &str) -> Vec<TermMatch>;

    /// One summary item per matching term, in lexicon order.
    fn summarize(&self, text: &str) -> Vec<MatchSummaryItem>;

    /// Convenience bundle of `contains`, `count` and `list_matches`.
    fn scan(&self, text: &str) -> ScanReport {
        let matches = self.list_matches(text);
        let count = self.count(text);
        ScanReport {
            contains: !matches.is_empty(),
            count,
            matches,
        }
    }

    /// Returns the compiled lexicon used by the engine.
    fn compiled_lexicon(&self) -> &CompiledLexicon;

    /// Returns the engine's lexicon configuration.
    fn get_lexicon(&self) -> &LexiconConfig;

    /// Returns the engine's options.
    fn get_options(&self) -> &EngineOptions;
}
