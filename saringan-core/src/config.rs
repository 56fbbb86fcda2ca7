//! Configuration management for `saringan-core`.
//!
//! This module defines the lexicon data structures: category-tagged word lists plus
//! the masking settings used during redaction. It handles YAML (de)serialization and
//! provides utilities for loading, merging, filtering and validating lexicons.
//!
//! Categories exist for organization only. At match time every active category is
//! flattened into one ordered, de-duplicated term list (see [`LexiconConfig::combined_terms`]).
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::SaringanError;
use crate::matcher::word_boundary::is_word_char;

/// Maximum allowed length, in characters, of a single lexicon term.
pub const MAX_TERM_LENGTH: usize = 64;

/// Default masking character.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Default number of leading characters replaced by the mask.
pub const DEFAULT_MASKED_PREFIX_LEN: usize = 3;

/// A named word list (e.g. "indonesian", "leetspeak").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LexiconCategory {
    /// Unique identifier for the category.
    pub name: String,
    /// Human-readable description of what the category covers.
    pub description: Option<String>,
    /// Blocked terms. Canonicalized (trimmed, lowercased) when the lexicon is flattened.
    pub terms: Vec<String>,
    /// Explicit override for enabling/disabling the category.
    pub enabled: Option<bool>,
    /// If true, the category is dropped unless explicitly enabled.
    pub opt_in: bool,
}

/// User-facing masking settings. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MaskingConfig {
    pub mask_char: Option<char>,
    pub masked_prefix_len: Option<usize>,
}

/// Resolved options consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Character written in place of masked characters.
    pub mask_char: char,
    /// Number of leading characters of a match that get masked; the rest is kept.
    pub masked_prefix_len: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            masked_prefix_len: DEFAULT_MASKED_PREFIX_LEN,
        }
    }
}

impl EngineOptions {
    pub fn from_config(masking: &MaskingConfig) -> Self {
        let defaults = Self::default();
        Self {
            mask_char: masking.mask_char.unwrap_or(defaults.mask_char),
            masked_prefix_len: masking.masked_prefix_len.unwrap_or(defaults.masked_prefix_len),
        }
    }
}

/// One entry of the combined lexicon: a canonical term and the category it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LexiconTerm {
    pub term: String,
    pub category: String,
}

/// Represents the top-level lexicon configuration.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Ordered category lists. Order decides redaction order.
    pub categories: Vec<LexiconCategory>,
    #[serde(default)]
    pub masking: MaskingConfig,
}

/// Lowercase canonical form of a raw term.
pub fn canonical_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl LexiconConfig {
    /// Loads a lexicon from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading lexicon from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let config: LexiconConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;

        validate_lexicon(&config)?;
        info!(
            "Loaded {} categories from file {}.",
            config.categories.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the built-in lexicon embedded in the library.
    pub fn load_default_lexicon() -> Result<Self> {
        debug!("Loading default lexicon from embedded string...");
        let default_yaml = include_str!("../config/default_lexicon.yaml");
        let config: LexiconConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default lexicon")?;
        validate_lexicon(&config).context("Default lexicon is invalid")?;

        debug!("Loaded {} default categories.", config.categories.len());
        Ok(config)
    }

    /// Filters categories based on enable/disable lists provided via CLI.
    ///
    /// Disabled names are always dropped. Opt-in categories survive only when enabled.
    pub fn set_active_categories(&mut self, enable: &[String], disable: &[String]) {
        let enable_set: HashSet<&str> = enable.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable.iter().map(String::as_str).collect();
        let known: HashSet<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();

        for name in enable_set.difference(&known) {
            warn!("Category '{}' in `enable` list does not exist.", name);
        }
        for name in disable_set.difference(&known) {
            warn!("Category '{}' in `disable` list does not exist.", name);
        }

        self.categories.retain(|category| {
            let name = category.name.as_str();
            !disable_set.contains(name) && (!category.opt_in || enable_set.contains(name))
        });

        debug!("Active categories after filtering: {}", self.categories.len());
    }

    /// Flattens every active category into one ordered list of canonical terms.
    ///
    /// Categories are visited in order, then terms in order. Empty terms are skipped and
    /// the first occurrence of a duplicate wins.
    pub fn combined_terms(&self) -> Vec<LexiconTerm> {
        let mut seen = HashSet::new();
        let mut combined = Vec::new();

        for category in self.categories.iter().filter(|c| c.enabled != Some(false)) {
            for raw in &category.terms {
                let term = canonical_term(raw);
                if term.is_empty() {
                    continue;
                }
                if seen.insert(term.clone()) {
                    combined.push(LexiconTerm {
                        term,
                        category: category.name.clone(),
                    });
                }
            }
        }
        combined
    }

    pub fn category(&self, name: &str) -> Option<&LexiconCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Merges a user lexicon into the defaults.
///
/// A user category with a known name replaces the default one in place; new categories
/// are appended. Set masking fields override the defaults.
pub fn merge_lexicons(default_config: LexiconConfig, user_config: Option<LexiconConfig>) -> LexiconConfig {
    debug!(
        "merge_lexicons called. Default categories: {}",
        default_config.categories.len()
    );

    let mut categories = default_config.categories;
    let mut masking = default_config.masking;

    if let Some(user_cfg) = user_config {
        debug!("Merging {} user categories.", user_cfg.categories.len());
        for user_category in user_cfg.categories {
            match categories.iter_mut().find(|c| c.name == user_category.name) {
                Some(existing) => {
                    debug!("Overriding category '{}' with user definition.", user_category.name);
                    *existing = user_category;
                }
                None => categories.push(user_category),
            }
        }

        if let Some(mask_char) = user_cfg.masking.mask_char {
            debug!("Overriding mask char with user value: {:?}", mask_char);
            masking.mask_char = Some(mask_char);
        }
        if let Some(prefix) = user_cfg.masking.masked_prefix_len {
            debug!("Overriding masked prefix length with user value: {}", prefix);
            masking.masked_prefix_len = Some(prefix);
        }
    }

    debug!("Final category count after merge: {}", categories.len());
    LexiconConfig { categories, masking }
}

/// Validates lexicon integrity. All problems are reported in one error.
pub fn validate_lexicon(config: &LexiconConfig) -> Result<()> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for category in &config.categories {
        if category.name.trim().is_empty() {
            errors.push("A category has an empty `name` field.".to_string());
        } else if !names.insert(category.name.as_str()) {
            errors.push(format!("Duplicate category name found: '{}'.", category.name));
        }

        for (idx, raw) in category.terms.iter().enumerate() {
            let term = raw.trim();
            if term.is_empty() {
                errors.push(format!(
                    "Category '{}': term #{} is empty.",
                    category.name,
                    idx + 1
                ));
                continue;
            }
            let len = term.chars().count();
            if len > MAX_TERM_LENGTH {
                errors.push(format!(
                    "Category '{}': term '{}' is {} characters long (max {}).",
                    category.name, term, len, MAX_TERM_LENGTH
                ));
            }
        }
    }

    if let Some(mask_char) = config.masking.mask_char {
        if is_word_char(mask_char) {
            errors.push(format!(
                "Mask character {:?} must not be a letter, digit or underscore.",
                mask_char
            ));
        }
    }
    if config.masking.masked_prefix_len == Some(0) {
        errors.push("`masked_prefix_len` must be at least 1.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SaringanError::InvalidLexicon(errors.join("\n")).into())
    }
}
