//! Session state
//!
//! The reader's current translation, position and tab, held as a value.
//! Each transition returns a new `Session`; the old one is left untouched.

mod position;

pub use position::{initial_position, reconcile, Position};

use crate::corpus::CorpusStore;
use crate::registry::TranslationRegistry;
use serde::{Deserialize, Serialize};

/// Top-level reader tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Read,
    Bookmarks,
    Settings,
}

/// Snapshot of what the reader is showing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    translation: Option<String>,
    position: Option<Position>,
    tab: Tab,
}

impl Session {
    /// A session with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the startup translation and position
    ///
    /// `preferred` lists candidate identifiers in priority order; the first
    /// known one wins, else the first discovered translation.
    pub fn open(registry: &mut TranslationRegistry, preferred: &[Option<&str>]) -> Self {
        let Some(id) = registry.initial_id(preferred).map(str::to_string) else {
            tracing::warn!("No translations available");
            return Self::new();
        };
        let position = registry.select(&id).and_then(initial_position);
        Self {
            translation: Some(id),
            position,
            tab: Tab::default(),
        }
    }

    /// Switch translation, keeping the position where the new corpus allows
    ///
    /// Unknown identifiers return an unchanged copy.
    pub fn select_translation(&self, registry: &mut TranslationRegistry, id: &str) -> Self {
        let Some(store) = registry.select(id) else {
            return self.clone();
        };
        let position = reconcile(
            self.position.as_ref().map(|p| p.book.as_str()),
            self.position.as_ref().map(|p| p.chapter.as_str()),
            store,
        );
        if position.is_none() {
            tracing::warn!("Translation '{}' has no content", id);
        }
        Self {
            translation: Some(id.to_string()),
            position,
            tab: self.tab,
        }
    }

    /// Move to a position; positions absent from `store` are ignored
    pub fn navigate_to(&self, store: &CorpusStore, book: &str, chapter: &str) -> Self {
        let Some(chapter) = store.book(book).and_then(|b| b.find_chapter(chapter)) else {
            tracing::debug!("Ignoring navigation to unknown {} {}", book, chapter);
            return self.clone();
        };
        Self {
            position: Some(Position::new(book, chapter.key())),
            ..self.clone()
        }
    }

    /// Show a different tab
    pub fn switch_tab(&self, tab: Tab) -> Self {
        Self {
            tab,
            ..self.clone()
        }
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// False when the selected corpus has nothing to show
    pub fn has_content(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TranslationRegistry {
        let mut registry = TranslationRegistry::new();
        registry.insert_loaded(
            "KJV",
            CorpusStore::from_verses([
                ("Genesis", "1", "1", "In the beginning"),
                ("Genesis", "3", "1", "Now the serpent"),
                ("John", "3", "16", "For God so loved"),
            ]),
        );
        registry.insert_loaded(
            "NT",
            CorpusStore::from_verses([("Matthew", "1", "1", "The book"), ("John", "3", "16", "For God")]),
        );
        registry.insert_loaded("EMPTY", CorpusStore::new());
        registry
    }

    #[test]
    fn test_open_defaults_to_first_translation() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[None]);
        assert_eq!(session.translation(), Some("KJV"));
        assert_eq!(session.position(), Some(&Position::new("Genesis", "1")));
        assert_eq!(session.tab(), Tab::Read);
    }

    #[test]
    fn test_open_prefers_known_setting() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[Some("NT")]);
        assert_eq!(session.translation(), Some("NT"));
    }

    #[test]
    fn test_switch_keeps_position_when_available() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[None]);
        let store = registry.current_store().unwrap().clone();
        let at_john = session.navigate_to(&store, "John", "3");

        let switched = at_john.select_translation(&mut registry, "NT");
        assert_eq!(switched.position(), Some(&Position::new("John", "3")));
        // original value untouched
        assert_eq!(at_john.translation(), Some("KJV"));
    }

    #[test]
    fn test_switch_falls_back_to_first_book() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[None]);
        let store = registry.current_store().unwrap().clone();
        let at_gen3 = session.navigate_to(&store, "Genesis", "3");

        let switched = at_gen3.select_translation(&mut registry, "NT");
        assert_eq!(switched.position(), Some(&Position::new("Matthew", "1")));
    }

    #[test]
    fn test_switch_to_empty_has_no_content() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[None]);
        let switched = session.select_translation(&mut registry, "EMPTY");
        assert!(!switched.has_content());
        assert_eq!(switched.translation(), Some("EMPTY"));
    }

    #[test]
    fn test_switch_unknown_is_noop() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[None]);
        let same = session.select_translation(&mut registry, "NIV");
        assert_eq!(same, session);
        assert_eq!(registry.current_id(), Some("KJV"));
    }

    #[test]
    fn test_navigate_rejects_unknown() {
        let mut registry = registry();
        let session = Session::open(&mut registry, &[None]);
        let store = registry.current_store().unwrap().clone();
        assert_eq!(session.navigate_to(&store, "Exodus", "1"), session);
        assert_eq!(session.navigate_to(&store, "Genesis", "2"), session);
    }

    #[test]
    fn test_switch_tab() {
        let session = Session::new().switch_tab(Tab::Bookmarks);
        assert_eq!(session.tab(), Tab::Bookmarks);
        assert_eq!(Session::new().tab(), Tab::Read);
    }
}
