// File: saringan-core/src/filter.rs

//! `filter.rs`
//! One-shot helpers over the built-in lexicon.
//!
//! The default engine is built lazily on first use and shared read-only by every caller
//! afterwards. Each helper accepts `impl Into<Option<&str>>`: a plain `&str` is text,
//! `None` stands for "no text value" and yields the helper's empty default.

use log::error;
use once_cell::sync::Lazy;

use crate::config::LexiconConfig;
use crate::engine::FilterEngine;
use crate::engines::lexicon_engine::LexiconEngine;

static DEFAULT_ENGINE: Lazy<Option<LexiconEngine>> = Lazy::new(|| {
    match LexiconConfig::load_default_lexicon().and_then(LexiconEngine::new) {
        Ok(engine) => Some(engine),
        Err(e) => {
            error!("Built-in lexicon could not be loaded, filtering is disabled: {:#}", e);
            None
        }
    }
});

/// The process-wide engine over the built-in lexicon, if it could be built.
pub fn default_engine() -> Option<&'static LexiconEngine> {
    DEFAULT_ENGINE.as_ref()
}

/// Redacts `text` with the built-in lexicon. `None` is passed through unchanged.
pub fn redact<'a>(text: impl Into<Option<&'a str>>) -> Option<String> {
    let text = text.into()?;
    Some(match default_engine() {
        Some(engine) => engine.redact(text),
        None => text.to_string(),
    })
}

/// True iff `text` contains a blocked term as a whole word.
pub fn contains<'a>(text: impl Into<Option<&'a str>>) -> bool {
    match (text.into(), default_engine()) {
        (Some(text), Some(engine)) => engine.contains(text),
        _ => false,
    }
}

/// Total number of whole-word matches in `text`.
pub fn count<'a>(text: impl Into<Option<&'a str>>) -> usize {
    match (text.into(), default_engine()) {
        (Some(text), Some(engine)) => engine.count(text),
        _ => 0,
    }
}

/// Distinct blocked terms found in `text`, in lexicon order.
pub fn list_matches<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    match (text.into(), default_engine()) {
        (Some(text), Some(engine)) => engine.list_matches(text),
        _ => Vec::new(),
    }
}
