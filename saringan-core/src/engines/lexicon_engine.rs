//! A `FilterEngine` that runs one whole-word, case-insensitive regex search per
//! lexicon term.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::{EngineOptions, LexiconConfig};
use crate::engine::FilterEngine;
use crate::matcher::compiler::{get_or_compile_lexicon, CompiledLexicon, CompiledTerm};
use crate::matcher::mask::mask_surface;
use crate::matcher::word_boundary::find_whole_words;
use crate::term_match::{log_term_match_debug, MatchSummaryItem, TermMatch};

#[derive(Debug)]
pub struct LexiconEngine {
    compiled: Arc<CompiledLexicon>,
    config: LexiconConfig,
    options: EngineOptions,
}

impl LexiconEngine {
    /// Builds an engine whose masking options come from `config.masking`.
    pub fn new(config: LexiconConfig) -> Result<Self> {
        let options = EngineOptions::from_config(&config.masking);
        Self::with_options(config, options)
    }

    pub fn with_options(config: LexiconConfig, options: EngineOptions) -> Result<Self> {
        let compiled = get_or_compile_lexicon(&config)
            .context("Failed to compile lexicon for LexiconEngine")?;
        debug!(
            "LexiconEngine ready with {} terms (mask {:?}, prefix {}).",
            compiled.len(),
            options.mask_char,
            options.masked_prefix_len
        );

        Ok(Self {
            compiled,
            config,
            options,
        })
    }

    /// Applies a single term to `text`, borrowing when nothing matches.
    fn redact_term<'t>(&self, compiled_term: &CompiledTerm, text: &'t str) -> Cow<'t, str> {
        let mut out = String::new();
        let mut last_end = 0usize;
        let mut matched = false;

        for m in find_whole_words(&compiled_term.regex, text) {
            matched = true;
            let masked = mask_surface(m.as_str(), &self.options);
            log_term_match_debug(module_path!(), &compiled_term.term, m.as_str(), &masked);
            out.push_str(&text[last_end..m.start()]);
            out.push_str(&masked);
            last_end = m.end();
        }

        if !matched {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last_end..]);
        Cow::Owned(out)
    }

    fn matches_for<'a>(&'a self, compiled_term: &'a CompiledTerm, text: &'a str) -> impl Iterator<Item = TermMatch> + 'a {
        find_whole_words(&compiled_term.regex, text).map(move |m| TermMatch {
            term: compiled_term.term.clone(),
            category: compiled_term.category.clone(),
            matched_text: m.as_str().to_string(),
            masked_text: mask_surface(m.as_str(), &self.options),
            start: m.start(),
            end: m.end(),
        })
    }
}

impl FilterEngine for LexiconEngine {
    fn redact(&self, text: &str) -> String {
        let mut current: Cow<'_, str> = Cow::Borrowed(text);
        for compiled_term in &self.compiled.terms {
            let next = match self.redact_term(compiled_term, &current) {
                Cow::Owned(redacted) => Some(redacted),
                Cow::Borrowed(_) => None,
            };
            if let Some(redacted) = next {
                current = Cow::Owned(redacted);
            }
        }
        current.into_owned()
    }

    fn contains(&self, text: &str) -> bool {
        self.compiled
            .terms
            .iter()
            .any(|t| find_whole_words(&t.regex, text).next().is_some())
    }

    fn count(&self, text: &str) -> usize {
        self.compiled
            .terms
            .iter()
            .map(|t| find_whole_words(&t.regex, text).count())
            .sum()
    }

    fn list_matches(&self, text: &str) -> Vec<String> {
        self.compiled
            .terms
            .iter()
            .filter(|t| find_whole_words(&t.regex, text).next().is_some())
            .map(|t| t.term.clone())
            .collect()
    }

    fn find_matches(&self, text: &str) -> Vec<TermMatch> {
        let mut all: Vec<TermMatch> = self
            .compiled
            .terms
            .iter()
            .flat_map(|t| self.matches_for(t, text))
            .collect();
        // Stable: ties keep lexicon order.
        all.sort_by_key(|m| m.start);
        all
    }

    fn summarize(&self, text: &str) -> Vec<MatchSummaryItem> {
        self.compiled
            .terms
            .iter()
            .filter_map(|t| {
                let matched_texts: Vec<String> = find_whole_words(&t.regex, text)
                    .map(|m| m.as_str().to_string())
                    .collect();
                if matched_texts.is_empty() {
                    return None;
                }
                Some(MatchSummaryItem {
                    term: t.term.clone(),
                    category: t.category.clone(),
                    occurrences: matched_texts.len(),
                    matched_texts,
                })
            })
            .collect()
    }

    fn compiled_lexicon(&self) -> &CompiledLexicon {
        &self.compiled
    }

    fn get_lexicon(&self) -> &LexiconConfig {
        &self.config
    }

    fn get_options(&self) -> &EngineOptions {
        &self.options
    }
}
