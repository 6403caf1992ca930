//! Reader facade
//!
//! Wires the registry, session, bookmarks and settings of one data folder
//! together behind the request/response calls a front end makes.

use crate::config::{AppConfig, SearchConfig};
use crate::corpus::{display_order, find_book, library, CorpusStore, LibraryGroup};
use crate::error::Result;
use crate::persist::{Bookmark, BookmarkStore, Settings, BOOKMARKS_FILE, SETTINGS_FILE};
use crate::registry::TranslationRegistry;
use crate::search::{SearchResult, Searcher};
use crate::session::{Session, Tab};
use std::path::{Path, PathBuf};

/// Engine state for one data folder
pub struct Reader {
    data_dir: PathBuf,
    registry: TranslationRegistry,
    session: Session,
    bookmarks: BookmarkStore,
    settings: Settings,
    search_config: SearchConfig,
}

impl Reader {
    /// Open a data folder
    ///
    /// The startup translation is the one named in settings, else the
    /// configured default, else the first discovered.
    pub fn open(data_dir: &Path, config: &AppConfig) -> Self {
        let settings = Settings::load_from_file(&data_dir.join(SETTINGS_FILE));
        let bookmarks = BookmarkStore::load(data_dir.join(BOOKMARKS_FILE));
        let mut registry = TranslationRegistry::discover(data_dir);
        let session = Session::open(
            &mut registry,
            &[settings.translation.as_deref(), config.default_translation()],
        );
        tracing::info!(
            "Opened {:?}: {} translation(s), current {:?}",
            data_dir,
            registry.len(),
            session.translation()
        );

        Self {
            data_dir: data_dir.to_path_buf(),
            registry,
            session,
            bookmarks,
            settings,
            search_config: config.search_config(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Rescan the data folder; the current translation stays selected if still present
    pub fn discover_translations(&mut self) -> Vec<&str> {
        let current = self.session.translation().map(str::to_string);
        self.registry = TranslationRegistry::discover(&self.data_dir);
        self.session = match current {
            Some(id) if self.registry.contains(&id) => {
                self.session.select_translation(&mut self.registry, &id)
            }
            _ => Session::open(&mut self.registry, &[None]).switch_tab(self.session.tab()),
        };
        self.registry.ids()
    }

    /// Identifiers of the known translations
    pub fn translations(&self) -> Vec<&str> {
        self.registry.ids()
    }

    /// Switch translation and remember the choice in settings
    ///
    /// Returns `false` (and changes nothing) for unknown identifiers.
    pub fn select_translation(&mut self, id: &str) -> Result<bool> {
        if !self.registry.contains(id) {
            tracing::warn!("Unknown translation '{}'", id);
            return Ok(false);
        }
        self.session = self.session.select_translation(&mut self.registry, id);
        self.settings.translation = Some(id.to_string());
        self.save_current_settings()?;
        Ok(true)
    }

    /// The loaded corpus of the current translation
    pub fn current_store(&self) -> Option<&CorpusStore> {
        self.registry.current_store()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Books of the current translation in the same order as [`Reader::library`]
    pub fn list_books(&self) -> Vec<&str> {
        self.current_store()
            .map(|s| display_order(s).into_iter().map(|b| b.label()).collect())
            .unwrap_or_default()
    }

    /// Books grouped by testament, optionally filtered by name
    pub fn library(&self, filter: Option<&str>) -> Vec<LibraryGroup> {
        self.current_store()
            .map(|s| library(s, filter))
            .unwrap_or_default()
    }

    /// Resolve a typed book name to the label used by the current translation
    pub fn resolve_book(&self, name: &str) -> Option<&str> {
        self.current_store()
            .and_then(|s| find_book(s, name))
            .map(|b| b.label())
    }

    /// Chapter keys of a book in numeric order
    pub fn list_chapters(&self, book: &str) -> Vec<&str> {
        self.current_store()
            .map(|s| s.chapters(book))
            .unwrap_or_default()
    }

    /// Verses of a chapter in numeric order
    pub fn list_verses(&self, book: &str, chapter: &str) -> Vec<(&str, &str)> {
        self.list_verses_from(book, chapter, None)
    }

    /// Verses of a chapter from a starting verse on
    pub fn list_verses_from(&self, book: &str, chapter: &str, start: Option<&str>) -> Vec<(&str, &str)> {
        self.current_store()
            .map(|s| s.verses_from(book, chapter, start))
            .unwrap_or_default()
    }

    /// Move the reading position
    ///
    /// Returns `false` and keeps the old position when the current
    /// translation has no such book and chapter.
    pub fn navigate_to(&mut self, book: &str, chapter: &str) -> bool {
        let Some(store) = self.registry.current_store() else {
            return false;
        };
        if store.book(book).and_then(|b| b.find_chapter(chapter)).is_none() {
            return false;
        }
        self.session = self.session.navigate_to(store, book, chapter);
        true
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.session = self.session.switch_tab(tab);
    }

    /// Search the current translation
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        match self.current_store() {
            Some(store) => Searcher::new(store).search(query, &self.search_config),
            None => Vec::new(),
        }
    }

    /// Bookmark a verse; duplicates are ignored
    pub fn add_bookmark(&mut self, bookmark: Bookmark) -> Result<bool> {
        self.bookmarks.add(bookmark)
    }

    /// Delete a bookmark
    pub fn remove_bookmark(&mut self, bookmark: &Bookmark) -> Result<bool> {
        self.bookmarks.remove(bookmark)
    }

    pub fn list_bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.list()
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Re-read settings from disk
    pub fn load_settings(&mut self) -> &Settings {
        self.settings = Settings::load_from_file(&self.data_dir.join(SETTINGS_FILE));
        &self.settings
    }

    /// Replace and persist the settings record
    pub fn save_settings(&mut self, settings: Settings) -> Result<()> {
        self.settings = settings;
        self.save_current_settings()
    }

    /// Change the font size by `delta`, clamped, and persist
    pub fn adjust_font(&mut self, delta: i64) -> Result<i64> {
        let size = self.settings.adjust_font(delta);
        self.save_current_settings()?;
        Ok(size)
    }

    /// Set a known theme and persist; unknown names change nothing
    pub fn set_theme(&mut self, theme: &str) -> Result<bool> {
        if !self.settings.set_theme(theme) {
            return Ok(false);
        }
        self.save_current_settings()?;
        Ok(true)
    }

    fn save_current_settings(&self) -> Result<()> {
        self.settings
            .save_to_file(&self.data_dir.join(SETTINGS_FILE))
    }
}
