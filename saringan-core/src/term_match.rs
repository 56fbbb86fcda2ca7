// saringan-core/src/term_match.rs
//! Data structures describing matches and scan results, plus logging helpers that keep
//! matched text out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Whether raw matched text may appear in debug logs. Read once from the environment.
    static ref TERM_DEBUG_ALLOWED: bool = {
        std::env::var("SARINGAN_ALLOW_DEBUG_TERMS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single whole-word occurrence of a lexicon term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatch {
    /// Canonical lexicon term that matched.
    pub term: String,
    /// Category the term belongs to.
    pub category: String,
    /// Surface text as it appears in the input.
    pub matched_text: String,
    /// Masked replacement for `matched_text`.
    pub masked_text: String,
    /// Byte offsets into the scanned input.
    pub start: usize,
    pub end: usize,
}

/// Per-term aggregation of matches, in lexicon order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummaryItem {
    pub term: String,
    pub category: String,
    pub occurrences: usize,
    pub matched_texts: Vec<String>,
}

/// Everything a caller may want to know about one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScanReport {
    pub contains: bool,
    pub count: usize,
    pub matches: Vec<String>,
}

impl ScanReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Log-safe stand-in for matched text.
pub fn redact_for_log(s: &str) -> String {
    format!("[{} chars]", s.chars().count())
}

fn get_loggable_content(content: &str) -> String {
    if *TERM_DEBUG_ALLOWED {
        content.to_string()
    } else {
        redact_for_log(content)
    }
}

pub fn log_term_match_debug(module_path: &str, term: &str, matched_text: &str, masked_text: &str) {
    debug!(
        "{} Found TermMatch: Term='{}', Original='{}', Masked='{}'",
        module_path,
        get_loggable_content(term),
        get_loggable_content(matched_text),
        masked_text
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_for_log_counts_chars() {
        assert_eq!(redact_for_log("anjing"), "[6 chars]");
        assert_eq!(redact_for_log("é"), "[1 chars]");
    }

    #[test]
    fn test_scan_report_json_shape() {
        let report = ScanReport {
            contains: true,
            count: 2,
            matches: vec!["babi".to_string()],
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["contains"], true);
        assert_eq!(value["count"], 2);
        assert_eq!(value["matches"][0], "babi");
    }
}
