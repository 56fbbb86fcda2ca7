//! compiler.rs - Manages the compilation and caching of lexicon terms.
//!
//! Each canonical term becomes a literal, case-insensitive regular expression. Compiled
//! lexicons are kept in a global, thread-safe cache so that engines built from the same
//! term list share one `Arc<CompiledLexicon>`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{LexiconConfig, LexiconTerm, MAX_TERM_LENGTH};
use crate::errors::SaringanError;

/// A single compiled lexicon term.
#[derive(Debug)]
pub struct CompiledTerm {
    /// Canonical (lowercase) term.
    pub term: String,
    /// Category the term was taken from.
    pub category: String,
    /// Literal, case-insensitive pattern for the term.
    pub regex: Regex,
}

/// The combined lexicon, compiled and in lexicon order.
#[derive(Debug)]
pub struct CompiledLexicon {
    pub terms: Vec<CompiledTerm>,
}

impl CompiledLexicon {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

lazy_static! {
    /// Global cache of compiled lexicons, keyed by a hash of the combined term list.
    static ref COMPILED_LEXICON_CACHE: RwLock<HashMap<u64, Arc<CompiledLexicon>>> =
        RwLock::new(HashMap::new());
}

fn hash_terms(terms: &[LexiconTerm]) -> u64 {
    let mut hasher = DefaultHasher::new();
    terms.hash(&mut hasher);
    hasher.finish()
}

/// Compiles an ordered term list. Every failure is collected and reported at once.
pub fn compile_terms(terms: Vec<LexiconTerm>) -> Result<CompiledLexicon, SaringanError> {
    debug!("Starting compilation of {} terms.", terms.len());

    let mut compiled = Vec::with_capacity(terms.len());
    let mut errors = Vec::new();

    for LexiconTerm { term, category } in terms {
        let len = term.chars().count();
        if len > MAX_TERM_LENGTH {
            errors.push(SaringanError::TermLengthExceeded(term, len, MAX_TERM_LENGTH));
            continue;
        }

        let regex_result = RegexBuilder::new(&regex::escape(&term))
            .case_insensitive(true)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => compiled.push(CompiledTerm { term, category, regex }),
            Err(e) => errors.push(SaringanError::TermCompilationError(term, e)),
        }
    }

    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(SaringanError::Fatal(format!(
            "Failed to compile {} term(s):\n{}",
            errors.len(),
            message
        )));
    }

    debug!("Finished compiling lexicon. Total compiled: {}.", compiled.len());
    Ok(CompiledLexicon { terms: compiled })
}

/// Gets the compiled form of `config` from the cache, compiling it on a miss.
pub fn get_or_compile_lexicon(config: &LexiconConfig) -> Result<Arc<CompiledLexicon>> {
    let terms = config.combined_terms();
    let cache_key = hash_terms(&terms);

    {
        let cache = COMPILED_LEXICON_CACHE
            .read()
            .map_err(|_| SaringanError::Fatal("Lexicon cache lock poisoned".to_string()))?;
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled lexicon from cache for key: {}", cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    debug!("Compiled lexicon not found in cache. Compiling now.");
    let compiled = Arc::new(compile_terms(terms)?);

    COMPILED_LEXICON_CACHE
        .write()
        .map_err(|_| SaringanError::Fatal("Lexicon cache lock poisoned".to_string()))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Compiled and cached lexicon for key: {}", cache_key);
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconCategory;

    fn config_with(terms: &[&str]) -> LexiconConfig {
        LexiconConfig {
            categories: vec![LexiconCategory {
                name: "test".to_string(),
                terms: terms.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_terms_with_regex_metacharacters_are_literal() {
        let compiled = compile_terms(vec![LexiconTerm {
            term: "f.ck".to_string(),
            category: "test".to_string(),
        }])
        .unwrap();
        assert!(compiled.terms[0].regex.is_match("F.CK"));
        assert!(!compiled.terms[0].regex.is_match("fuck"));
    }

    #[test]
    fn test_overlong_term_is_reported() {
        let long = "a".repeat(MAX_TERM_LENGTH + 1);
        let err = compile_terms(vec![LexiconTerm { term: long, category: "test".to_string() }])
            .unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }

    #[test]
    fn test_cache_returns_shared_instance() {
        let config = config_with(&["kampret", "kunyuk"]);
        let a = get_or_compile_lexicon(&config).unwrap();
        let b = get_or_compile_lexicon(&config.clone()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 2);
    }
}
