//! Persistence of user state
//!
//! Bookmarks and settings live next to the translation files and are
//! rewritten whole on every change.

mod bookmarks;
mod json_file;
mod settings;

pub use bookmarks::{load_bookmarks, parse_bookmarks, Bookmark, BookmarkStore};
pub use settings::{
    load_settings, save_settings, Settings, DEFAULT_FONT_SIZE, DEFAULT_THEME, KNOWN_THEMES,
    MAX_FONT_SIZE, MIN_FONT_SIZE,
};

/// Bookmarks file name inside the data folder
pub const BOOKMARKS_FILE: &str = "bible_bookmarks.json";
/// Settings file name inside the data folder
pub const SETTINGS_FILE: &str = "bible_settings.json";
