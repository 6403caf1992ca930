//! Search module
//!
//! Full-text and reference search over a loaded corpus, with snippets and
//! highlight spans for display.

mod searcher;
pub mod snippet;

pub use searcher::{search, Searcher};
pub use snippet::{HighlightSpan, TextRun};

use crate::corpus::reference;
use serde::{Deserialize, Serialize};

/// A matching verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Book label
    pub book: String,
    /// Chapter key
    pub chapter: String,
    /// Verse key
    pub verse: String,
    /// Preview text around the match
    pub snippet: String,
    /// Occurrences of the query inside `snippet`
    pub highlights: Vec<HighlightSpan>,
}

impl SearchResult {
    /// Create a search result without highlights
    pub fn new(book: String, chapter: String, verse: String, snippet: String) -> Self {
        Self {
            book,
            chapter,
            verse,
            snippet,
            highlights: Vec::new(),
        }
    }

    /// Attach highlight spans
    pub fn with_highlights(mut self, highlights: Vec<HighlightSpan>) -> Self {
        self.highlights = highlights;
        self
    }

    /// "Book chapter:verse"
    pub fn reference(&self) -> String {
        reference(&self.book, &self.chapter, &self.verse)
    }

    /// Snippet split into plain and highlighted runs
    pub fn runs(&self) -> Vec<TextRun<'_>> {
        snippet::runs(&self.snippet, &self.highlights)
    }
}
