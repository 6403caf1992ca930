//! Reading position and its reconciliation across corpora

use crate::corpus::CorpusStore;
use serde::{Deserialize, Serialize};

/// A verified (book, chapter) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub book: String,
    pub chapter: String,
}

impl Position {
    pub fn new(book: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
        }
    }

    /// Whether this position exists in `store`
    pub fn is_valid_in(&self, store: &CorpusStore) -> bool {
        store
            .book(&self.book)
            .is_some_and(|b| b.chapter(&self.chapter).is_some())
    }
}

/// Find the nearest valid position in `store`
///
/// Keeps the old book if the store has it, else takes the store's first
/// book in load order. Keeps the old chapter if the book has it (numeric
/// comparison, so "03" matches "3"), else the book's lowest chapter.
/// Returns `None` when the store has no content.
pub fn reconcile(
    old_book: Option<&str>,
    old_chapter: Option<&str>,
    store: &CorpusStore,
) -> Option<Position> {
    let book = old_book
        .and_then(|label| store.book(label))
        .or_else(|| store.iter().next())?;

    let chapter = old_chapter
        .and_then(|key| book.find_chapter(key))
        .map(|c| c.key())
        .or_else(|| book.chapter_keys().into_iter().next())?;

    Some(Position::new(book.label(), chapter))
}

/// Starting position for a freshly opened corpus: first book, chapter 1 if present
pub fn initial_position(store: &CorpusStore) -> Option<Position> {
    reconcile(None, Some("1"), store)
}
