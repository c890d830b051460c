use enclose::scores::{Medal, ScoreStore};
use std::fs;

#[test]
fn record_keeps_only_the_best() {
    let mut store = ScoreStore::default();

    assert_eq!(store.best(0), 0);
    assert!(store.record(0, 12));
    assert!(!store.record(0, 8));
    assert!(store.record(0, 20));
    assert_eq!(store.best(0), 20);

    // Other levels are independent
    assert_eq!(store.best(3), 0);
    assert!(store.record(3, 5));
    assert_eq!(store.best(3), 5);
    assert_eq!(store.best(0), 20);
}

#[test]
fn save_and_load_roundtrip() {
    let path = std::env::temp_dir().join("enclose_scores_test.json");
    let path = path.to_str().expect("temp path is valid UTF-8");

    let mut store = ScoreStore::default();
    store.record(0, 18);
    store.record(2, 44);
    store.save_to_file(path).expect("save succeeds");

    let loaded = ScoreStore::load(path);
    assert_eq!(loaded.best(0), 18);
    assert_eq!(loaded.best(2), 44);
    assert_eq!(loaded.best(1), 0);

    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_loads_empty_store() {
    let store = ScoreStore::load("definitely/not/a/score/file.json");
    assert_eq!(store.best(0), 0);
}

#[test]
fn medal_thresholds() {
    let optimal = Some(20);

    assert_eq!(Medal::for_score(20, optimal), Medal::Gold);
    assert_eq!(Medal::for_score(25, optimal), Medal::Gold);
    assert_eq!(Medal::for_score(16, optimal), Medal::Silver);
    assert_eq!(Medal::for_score(10, optimal), Medal::Bronze);
    assert_eq!(Medal::for_score(9, optimal), Medal::None);

    // No authored optimum means no medals
    assert_eq!(Medal::for_score(100, None), Medal::None);
    assert_eq!(Medal::for_score(100, Some(0)), Medal::None);
}
