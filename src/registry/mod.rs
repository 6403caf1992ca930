//! Translation registry
//!
//! Tracks the translations found under a data root, loads their corpora on
//! demand and owns the notion of the current translation.

mod discover;

pub use discover::{discover, Discovered, BUNDLE_SUFFIX};

use crate::corpus::{CorpusLoad, CorpusStore};
use std::path::{Path, PathBuf};

/// A named edition of the corpus
#[derive(Debug, Clone)]
pub struct Translation {
    /// Identifier (file stem, e.g. "KJV")
    pub id: String,
    /// Source file
    pub location: PathBuf,
    store: Option<CorpusStore>,
}

impl Translation {
    pub fn new(id: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            store: None,
        }
    }

    /// Whether the corpus has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }
}

/// Registry of available translations
#[derive(Debug, Clone, Default)]
pub struct TranslationRegistry {
    translations: Vec<Translation>,
    current: Option<usize>,
}

impl TranslationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover translations under a data root
    pub fn discover(data_root: &Path) -> Self {
        Self::from_discovered(discover(data_root))
    }

    /// Build a registry from already-discovered entries
    pub fn from_discovered(found: Discovered) -> Self {
        Self {
            translations: found
                .into_iter()
                .map(|(id, path)| Translation::new(id, path))
                .collect(),
            current: None,
        }
    }

    /// Add (or replace) a translation backed by an in-memory store
    pub fn insert_loaded(&mut self, id: impl Into<String>, store: CorpusStore) {
        let id = id.into();
        match self.translations.iter_mut().find(|t| t.id == id) {
            Some(existing) => existing.store = Some(store),
            None => {
                let mut translation = Translation::new(id, PathBuf::new());
                translation.store = Some(store);
                self.translations.push(translation);
            }
        }
    }

    /// Identifiers in discovery order
    pub fn ids(&self) -> Vec<&str> {
        self.translations.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Source file of a translation
    pub fn location(&self, id: &str) -> Option<&Path> {
        self.position(id)
            .map(|pos| self.translations[pos].location.as_path())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.translations.iter().position(|t| t.id == id)
    }

    /// Make a translation current, loading it if needed
    ///
    /// Unknown identifiers leave the current selection unchanged and return `None`.
    pub fn select(&mut self, id: &str) -> Option<&CorpusStore> {
        let Some(pos) = self.position(id) else {
            tracing::warn!("Unknown translation '{}', keeping current selection", id);
            return None;
        };

        let translation = &mut self.translations[pos];
        if translation.store.is_none() {
            let outcome = CorpusStore::load_from_file(&translation.location);
            if let CorpusLoad::Empty(reason) = &outcome {
                tracing::warn!("Translation '{}' is empty: {}", translation.id, reason);
            }
            translation.store = Some(outcome.into_store());
        }
        self.current = Some(pos);
        self.translations[pos].store.as_ref()
    }

    /// Identifier of the current translation
    pub fn current_id(&self) -> Option<&str> {
        self.current.map(|pos| self.translations[pos].id.as_str())
    }

    /// Corpus of the current translation
    pub fn current_store(&self) -> Option<&CorpusStore> {
        self.current
            .and_then(|pos| self.translations[pos].store.as_ref())
    }

    /// Corpus of a translation, if already loaded
    pub fn store(&self, id: &str) -> Option<&CorpusStore> {
        self.position(id)
            .and_then(|pos| self.translations[pos].store.as_ref())
    }

    /// Pick the startup translation: the preferred ones in order if known, else the first
    pub fn initial_id<'a>(&'a self, preferred: &[Option<&str>]) -> Option<&'a str> {
        preferred
            .iter()
            .flatten()
            .find_map(|id| self.position(id))
            .or_else(|| (!self.translations.is_empty()).then_some(0))
            .map(|pos| self.translations[pos].id.as_str())
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
