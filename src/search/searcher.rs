//! Searcher implementation
//!
//! Scans a corpus in its natural order (books, chapters and verses as
//! loaded), stopping once the result cap is reached. No ranking.

use super::snippet::{highlight_spans, make_snippet};
use super::SearchResult;
use crate::config::SearchConfig;
use crate::corpus::CorpusStore;

/// Searcher over one loaded corpus
pub struct Searcher<'a> {
    store: &'a CorpusStore,
}

/// Why a verse matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    /// Query is "book chapter" or "book chapter:verse"
    Reference,
    /// Query is part of the book label
    Book,
    /// Query occurs in the verse text
    Text,
}

impl<'a> Searcher<'a> {
    /// Create a searcher borrowing a corpus
    pub fn new(store: &'a CorpusStore) -> Self {
        Self { store }
    }

    /// Search with the given configuration
    pub fn search(&self, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
        let query = query.trim();
        let mut results = Vec::new();
        if query.is_empty() || config.max_results == 0 {
            return results;
        }

        let qlow = query.to_lowercase();

        'scan: for book in self.store.iter() {
            let book_low = book.label().to_lowercase();
            for chapter in book.chapters() {
                for verse in chapter.verses() {
                    if results.len() >= config.max_results {
                        break 'scan;
                    }
                    let text_low = verse.text.to_lowercase();
                    let Some(kind) =
                        match_verse(&qlow, &book_low, chapter.key(), &verse.number, &text_low)
                    else {
                        continue;
                    };
                    tracing::trace!(
                        "{:?} match at {} {}:{}",
                        kind,
                        book.label(),
                        chapter.key(),
                        verse.number
                    );

                    let snippet = make_snippet(&verse.text, query);
                    let highlights = highlight_spans(&snippet, query);
                    results.push(
                        SearchResult::new(
                            book.label().to_string(),
                            chapter.key().to_string(),
                            verse.number.clone(),
                            snippet,
                        )
                        .with_highlights(highlights),
                    );
                }
            }
        }

        tracing::debug!("Search for '{}' returned {} result(s)", query, results.len());
        results
    }
}

/// Apply the match rules in precedence order
fn match_verse(
    qlow: &str,
    book_low: &str,
    chapter: &str,
    verse: &str,
    text_low: &str,
) -> Option<MatchKind> {
    let chapter_ref = format!("{} {}", book_low, chapter.to_lowercase());
    let verse_ref = format!("{}:{}", chapter_ref, verse.to_lowercase());
    if qlow == verse_ref || qlow == chapter_ref {
        Some(MatchKind::Reference)
    } else if book_low.contains(qlow) {
        Some(MatchKind::Book)
    } else if text_low.contains(qlow) {
        Some(MatchKind::Text)
    } else {
        None
    }
}

/// Search a corpus for `query`, returning at most `max_results` matches
pub fn search(store: &CorpusStore, query: &str, max_results: usize) -> Vec<SearchResult> {
    Searcher::new(store).search(query, &SearchConfig::new().with_max_results(max_results))
}
