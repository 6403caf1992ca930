//! Corpus loading tests
//!
//! Both source shapes, fail-soft loading, and persistence of the nested shape.

use lectio::corpus::{CorpusLoad, CorpusStore, EmptyReason};
use serde_json::json;
use tempfile::TempDir;

const NESTED: &str = r#"{
    "Genesis": {
        "1": {"1": "In the beginning", "2": "And the earth was without form"},
        "2": {"1": "Thus the heavens"}
    },
    "John": {
        "3": {"16": "For God so loved the world", "17": "For God sent not his Son"}
    }
}"#;

fn flat() -> serde_json::Value {
    json!([
        {"book": "Genesis", "chapter": 1, "verse": 1, "text": "In the beginning"},
        {"book": "Genesis", "chapter": "1", "verse": "2", "text": "And the earth was without form"},
        {"book": "Genesis", "chapter": 2, "verse": 1, "text": "Thus the heavens"},
        {"book": "John", "chapter": 3, "verse": 16, "text": "For God so loved the world"},
        {"book": "John", "chapter": 3, "verse": 17, "text": "For God sent not his Son"}
    ])
}

#[test]
fn test_nested_and_flat_shapes_are_equivalent() {
    let nested = CorpusStore::load(NESTED.as_bytes()).into_store();
    let flat = CorpusStore::from_value(flat()).into_store();

    assert_eq!(nested.books(), flat.books());
    for book in nested.books() {
        assert_eq!(nested.chapters(book), flat.chapters(book));
        for chapter in nested.chapters(book) {
            assert_eq!(nested.verses(book, chapter), flat.verses(book, chapter));
        }
    }
    assert_eq!(nested.verse_count(), 5);
}

#[test]
fn test_books_keep_source_order() {
    let store = CorpusStore::load(br#"{"Tobit": {"1": {"1": "t"}}, "Acts": {"1": {"1": "a"}}}"#)
        .into_store();
    assert_eq!(store.books(), vec!["Tobit", "Acts"]);
}

#[test]
fn test_chapters_and_verses_in_numeric_order() {
    let store = CorpusStore::load(
        br#"{"Psalms": {"10": {"2": "b", "1": "a"}, "2": {"10": "z", "9": "y"}, "1": {"1": "x"}}}"#,
    )
    .into_store();
    assert_eq!(store.chapters("Psalms"), vec!["1", "2", "10"]);
    assert_eq!(store.verses("Psalms", "2"), vec![("9", "y"), ("10", "z")]);
}

#[test]
fn test_malformed_input_is_empty_not_error() {
    let outcome = CorpusStore::load(b"{not json");
    assert!(matches!(outcome.empty_reason(), Some(EmptyReason::Malformed(_))));
    assert!(outcome.into_store().is_empty());

    let outcome = CorpusStore::load(b"42");
    assert_eq!(outcome, CorpusLoad::Empty(EmptyReason::UnsupportedRoot));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let outcome = CorpusStore::load_from_file(&temp_dir.path().join("NOPE.json"));
    assert_eq!(outcome, CorpusLoad::Empty(EmptyReason::Missing));
}

#[test]
fn test_flat_records_skip_incomplete_entries() {
    let store = CorpusStore::from_value(json!([
        {"book": "John", "chapter": 1, "verse": 1, "text": "In the beginning was the Word"},
        {"chapter": 1, "verse": 2, "text": "no book"},
        {"book": "John", "verse": 3, "text": "no chapter"},
        {"book": "John", "chapter": 1, "verse": 4},
        "not a record"
    ]))
    .into_store();

    assert_eq!(store.verses("John", "1"), vec![("1", "In the beginning was the Word"), ("4", "")]);
}

#[test]
fn test_saved_store_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("KJV.json");

    let store = CorpusStore::from_value(flat()).into_store();
    std::fs::write(&path, serde_json::to_vec_pretty(&store).unwrap()).unwrap();

    let reloaded = CorpusStore::load_from_file(&path);
    assert!(reloaded.is_loaded());
    assert_eq!(reloaded.into_store().verses("John", "3"), store.verses("John", "3"));
}
