// saringan-core/tests/filter_properties_tests.rs
//! Behavioral tests for the one-shot filter helpers and the default `LexiconEngine`.

use saringan_core::filter::{self, contains, count, list_matches, redact};
use saringan_core::{FilterEngine, LexiconCategory, LexiconConfig, LexiconEngine};
use test_log::test;

const CLEAN_TEXTS: &[&str] = &[
    "",
    "Pantai Kuta indah sekali saat matahari terbenam.",
    "Jangan lupa beli asuransi perjalanan sebelum ke Bromo.",
    "The temple tour in Yogyakarta was wonderful.",
    "Kasus hilangnya bagasi sudah dilaporkan ke petugas.",
];

#[test]
fn clean_text_is_untouched() {
    for text in CLEAN_TEXTS {
        assert_eq!(redact(*text).as_deref(), Some(*text));
        assert!(!contains(*text), "unexpected match in {:?}", text);
        assert_eq!(count(*text), 0);
        assert!(list_matches(*text).is_empty());
    }
}

#[test]
fn absent_text_returns_defaults() {
    let missing: Option<&str> = None;
    assert_eq!(redact(missing), None);
    assert!(!contains(missing));
    assert_eq!(count(missing), 0);
    assert_eq!(list_matches(missing), Vec::<String>::new());
}

#[test]
fn embedded_term_does_not_match() {
    assert!(contains("dasar asu"));
    assert!(!contains("asuransi"));
    assert_eq!(redact("asuransi asu").as_deref(), Some("asuransi ***"));
}

#[test]
fn masking_rule_by_length() {
    assert_eq!(redact("asu").as_deref(), Some("***"));
    assert_eq!(redact("anjing").as_deref(), Some("***ing"));
    assert_eq!(redact("mf").as_deref(), Some("**"));
    assert_eq!(redact("BaNgSaT").as_deref(), Some("***gSaT"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(contains("ANJING"));
    assert!(contains("Anjing"));
    assert!(contains("anjing"));
}

#[test]
fn count_aggregates_all_occurrences() {
    assert_eq!(count("babi, BABI dan tolol"), 3);
}

#[test]
fn list_matches_is_deduplicated_and_in_lexicon_order() {
    // "shit" (english) precedes "asu" (javanese) in the lexicon regardless of text order.
    assert_eq!(
        list_matches("asu asu shit babi"),
        vec!["babi".to_string(), "shit".to_string(), "asu".to_string()]
    );
}

#[test]
fn leetspeak_and_abbreviations_are_caught() {
    assert_eq!(
        list_matches("k0nt0l lu, wtf"),
        vec!["wtf".to_string(), "k0nt0l".to_string()]
    );
    assert_eq!(redact("4nj1ng!").as_deref(), Some("***1ng!"));
}

#[test]
fn redact_is_not_required_to_be_idempotent() {
    let config = LexiconConfig {
        categories: vec![
            LexiconCategory {
                name: "suffix".to_string(),
                terms: vec!["pret".to_string()],
                ..Default::default()
            },
            LexiconCategory {
                name: "main".to_string(),
                terms: vec!["kampret".to_string()],
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    let engine = LexiconEngine::new(config).unwrap();
    let once = engine.redact("kampret");
    assert_eq!(once, "***pret");
    // Masking "kampret" exposed "pret" as a standalone word for the next run.
    assert_eq!(engine.redact(&once), "******t");
}

#[test]
fn default_lexicon_masks_exposed_javanese_suffix() {
    // "cok" and "cuk" follow the longer forms, so they re-mask the kept tail.
    assert_eq!(redact("jancok, macet lagi").as_deref(), Some("******, macet lagi"));
    assert_eq!(redact("jancuk").as_deref(), Some("******"));
    assert_eq!(redact("dancuk").as_deref(), Some("******"));
    assert_eq!(count("jancok"), 1);
    assert_eq!(list_matches("jancok"), vec!["jancok".to_string()]);
}

#[test]
fn default_engine_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("komentar {} dari pengunjung: bangsat", i);
                (count(text.as_str()), filter::default_engine().map(|e| e as *const _ as usize))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|(n, _)| *n == 1));
    assert!(results.windows(2).all(|w| w[0].1 == w[1].1));
}

#[test]
fn scan_report_matches_individual_operations() {
    let engine = filter::default_engine().unwrap();
    let text = "Jancok, jancok! Goblok.";
    let report = engine.scan(text);
    assert!(report.contains);
    assert_eq!(report.count, count(text));
    assert_eq!(report.matches, list_matches(text));
    assert_eq!(report.matches, vec!["goblok".to_string(), "jancok".to_string()]);
}
