// saringan-core/tests/lexicon_config_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use saringan_core::config::{self, LexiconCategory, LexiconConfig, MaskingConfig};
use saringan_core::{EngineOptions, SaringanError};

fn category(name: &str, terms: &[&str]) -> LexiconCategory {
    LexiconCategory {
        name: name.to_string(),
        description: None,
        terms: terms.iter().map(|t| t.to_string()).collect(),
        enabled: None,
        opt_in: false,
    }
}

#[test]
fn test_load_default_lexicon() {
    let lexicon = LexiconConfig::load_default_lexicon().unwrap();
    let names: Vec<&str> = lexicon.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["indonesian", "english", "javanese", "abbreviation", "leetspeak"]);
    assert!(lexicon.category("javanese").unwrap().terms.iter().any(|t| t == "asu"));
    assert_eq!(EngineOptions::from_config(&lexicon.masking), EngineOptions::default());
}

#[test]
fn test_default_lexicon_is_canonical() {
    let lexicon = LexiconConfig::load_default_lexicon().unwrap();
    for category in &lexicon.categories {
        for term in &category.terms {
            assert_eq!(term, &config::canonical_term(term), "term '{}' is not canonical", term);
        }
    }
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r##"
masking:
  mask_char: "#"
categories:
  - name: forum
    description: "Forum-specific insults"
    terms:
      - "  Kampungan "
      - norak
"##;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let lexicon = LexiconConfig::load_from_file(file.path())?;
    assert_eq!(lexicon.categories.len(), 1);
    assert_eq!(lexicon.masking.mask_char, Some('#'));
    assert_eq!(lexicon.masking.masked_prefix_len, None);

    let combined: Vec<String> = lexicon.combined_terms().into_iter().map(|t| t.term).collect();
    assert_eq!(combined, vec!["kampungan".to_string(), "norak".to_string()]);
    Ok(())
}

#[test]
fn test_load_from_file_reports_every_problem() -> Result<()> {
    let yaml_content = r#"
masking:
  mask_char: "x"
  masked_prefix_len: 0
categories:
  - name: dup
    terms: ["ok", "   "]
  - name: dup
    terms: []
  - name: ""
    terms: []
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = LexiconConfig::load_from_file(file.path()).unwrap_err().to_string();
    assert!(err.contains("Duplicate category name found: 'dup'"), "{}", err);
    assert!(err.contains("term #2 is empty"), "{}", err);
    assert!(err.contains("empty `name` field"), "{}", err);
    assert!(err.contains("must not be a letter"), "{}", err);
    assert!(err.contains("must be at least 1"), "{}", err);
    Ok(())
}

#[test]
fn test_load_from_missing_file_fails() {
    assert!(LexiconConfig::load_from_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn test_combined_terms_flatten_in_order_and_dedupe() {
    let lexicon = LexiconConfig {
        categories: vec![
            category("a", &["Babi", "tolol"]),
            category("b", &["babi", "shit", ""]),
        ],
        masking: MaskingConfig::default(),
    };
    let combined = lexicon.combined_terms();
    let terms: Vec<&str> = combined.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(terms, vec!["babi", "tolol", "shit"]);
    assert_eq!(combined[0].category, "a");
}

#[test]
fn test_merge_lexicons_no_user_config() {
    let default_config = LexiconConfig {
        categories: vec![category("indonesian", &["babi"])],
        masking: MaskingConfig::default(),
    };
    let merged = config::merge_lexicons(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test]
fn test_merge_lexicons_override_in_place_and_append() {
    let default_config = LexiconConfig {
        categories: vec![
            category("indonesian", &["babi"]),
            category("english", &["shit"]),
        ],
        masking: MaskingConfig {
            mask_char: Some('*'),
            masked_prefix_len: Some(3),
        },
    };
    let user_config = LexiconConfig {
        categories: vec![
            category("forum", &["norak"]),
            category("indonesian", &["kampret"]),
        ],
        masking: MaskingConfig {
            mask_char: None,
            masked_prefix_len: Some(2),
        },
    };
    let merged = config::merge_lexicons(default_config, Some(user_config));

    let names: Vec<&str> = merged.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["indonesian", "english", "forum"]);
    assert_eq!(merged.categories[0].terms, vec!["kampret".to_string()]);
    assert_eq!(merged.masking.mask_char, Some('*'));
    assert_eq!(merged.masking.masked_prefix_len, Some(2));
}

#[test]
fn test_set_active_categories_with_opt_in() {
    let mut opt_in = category("leetspeak", &["b4bi"]);
    opt_in.opt_in = true;
    let mut lexicon = LexiconConfig {
        categories: vec![
            category("indonesian", &["babi"]),
            category("english", &["shit"]),
            opt_in,
        ],
        masking: MaskingConfig::default(),
    };

    let mut without = lexicon.clone();
    without.set_active_categories(&[], &["english".to_string()]);
    let names: Vec<&str> = without.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["indonesian"]);

    lexicon.set_active_categories(&["leetspeak".to_string(), "unknown".to_string()], &[]);
    let names: Vec<&str> = lexicon.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["indonesian", "english", "leetspeak"]);
}

#[test]
fn test_validate_lexicon_returns_invalid_lexicon_error() {
    let lexicon = LexiconConfig {
        categories: vec![category("dup", &["a"]), category("dup", &["b"])],
        ..Default::default()
    };
    let err = config::validate_lexicon(&lexicon).unwrap_err();
    match err.downcast_ref::<SaringanError>() {
        Some(SaringanError::InvalidLexicon(details)) => {
            assert!(details.contains("Duplicate category name found: 'dup'"), "{}", details);
        }
        other => panic!("expected InvalidLexicon, got {:?}", other),
    }
}
