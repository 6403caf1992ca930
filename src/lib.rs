//! lectio: multi-translation scripture reader engine
//!
//! This library holds the corpus model and search engine behind a
//! book → chapter → verse reader with parallel translations, bookmarks and
//! settings. Front ends call into it; it never calls back.
//!
//! # Features
//!
//! - Nested (`{book: {chapter: {verse: text}}}`) and flat record JSON sources
//! - Canonical 66-book ordering and book-name normalization
//! - Substring and reference search with snippets and highlight spans
//! - Position reconciliation when switching translations
//! - Bookmark and settings files compatible with existing data folders
//!
//! # Modules
//!
//! - `config`: TOML/env configuration, path resolution, search options
//! - `corpus`: corpus store, canonical order, name normalization, key ordering
//! - `registry`: translation discovery and selection
//! - `search`: search engine, snippets and highlighting
//! - `session`: reading position and session state transitions
//! - `persist`: bookmark and settings files
//! - `reader`: facade tying the above to one data folder

pub mod config;
pub mod corpus;
pub mod error;
pub mod persist;
pub mod reader;
pub mod registry;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use config::{AppConfig, SearchConfig};
pub use corpus::{CorpusLoad, CorpusStore};
pub use error::{LectioError, Result};
pub use persist::{Bookmark, Settings};
pub use reader::Reader;
pub use registry::TranslationRegistry;
pub use search::SearchResult;
pub use session::{Position, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_exists() {
        assert_eq!(NAME, "lectio");
    }
}
