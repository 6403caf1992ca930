//! Search engine tests

use lectio::config::SearchConfig;
use lectio::corpus::CorpusStore;
use lectio::search::{search, Searcher};

fn store() -> CorpusStore {
    CorpusStore::from_verses([
        ("Genesis", "1", "1", "In the beginning God created the heaven and the earth."),
        ("Genesis", "1", "2", "And the Spirit of God moved upon the face of the waters."),
        ("John", "1", "1", "In the beginning was the Word, and the Word was with God."),
        ("John", "3", "16", "For God so loved the world, that he gave his only begotten Son"),
        ("1 John", "4", "8", "He that loveth not knoweth not God; for God is love."),
    ])
}

#[test]
fn test_text_search_is_case_insensitive() {
    let results = search(&store(), "BEGINNING", 500);
    let refs: Vec<_> = results.iter().map(|r| r.reference()).collect();
    assert_eq!(refs, vec!["Genesis 1:1", "John 1:1"]);
}

#[test]
fn test_book_name_matches_every_verse_of_the_book() {
    let results = search(&store(), "genesis", 500);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.book == "Genesis"));
}

#[test]
fn test_book_substring_covers_related_books() {
    let results = search(&store(), "john", 500);
    let books: Vec<_> = results.iter().map(|r| r.book.as_str()).collect();
    assert_eq!(books, vec!["John", "John", "1 John"]);
}

#[test]
fn test_verse_reference() {
    let results = search(&store(), "  John 3:16 ", 500);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].verse, "16");
}

#[test]
fn test_result_cap() {
    let results = Searcher::new(&store()).search("god", &SearchConfig::new().with_max_results(2));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].reference(), "Genesis 1:1");
}

#[test]
fn test_empty_query_returns_nothing() {
    assert!(search(&store(), "", 500).is_empty());
    assert!(search(&store(), "   ", 500).is_empty());
    assert!(search(&store(), "zzz", 500).is_empty());
}

#[test]
fn test_long_verse_snippet_is_windowed() {
    let text = format!("{} needle {}", "a".repeat(100), "b".repeat(100));
    let store = CorpusStore::from_verses([("Job", "1", "1", text)]);
    let results = search(&store, "needle", 10);

    let snippet = &results[0].snippet;
    assert!(snippet.starts_with("..."));
    assert!(snippet.ends_with("..."));
    assert!(snippet.chars().count() <= 30 + 6 + 60 + 6);
    let span = results[0].highlights[0];
    assert_eq!(&snippet[span.start..span.end], "needle");
}

#[test]
fn test_highlights_mark_every_occurrence() {
    let results = search(&store(), "god", 500);
    let runs = results
        .iter()
        .find(|r| r.reference() == "1 John 4:8")
        .map(|r| r.runs())
        .unwrap();
    let marked: Vec<_> = runs.iter().filter(|r| r.highlighted).map(|r| r.text).collect();
    assert_eq!(marked, vec!["God", "God"]);
}

#[test]
fn test_greek_match_gets_windowed_snippet_and_highlight() {
    let text = format!("{} ΟΔΟΣ {}", "α".repeat(150), "β".repeat(10));
    let store = CorpusStore::from_verses([("Matthew", "7", "13", text)]);
    let results = search(&store, "οδο\u{03c2}", 10);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.snippet.starts_with("..."));
    assert!(result.snippet.contains("ΟΔΟΣ"));
    assert_eq!(result.highlights.len(), 1);
    let span = result.highlights[0];
    assert_eq!(&result.snippet[span.start..span.end], "ΟΔΟΣ");
}

#[test]
fn test_search_result_snapshot() {
    let results = search(&store(), "loved", 500);
    insta::assert_json_snapshot!("loved", results);
}
