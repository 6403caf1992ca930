//! Reader settings
//!
//! `{"translation": <id>|null, "font_size": <int>, "theme": "<name>"}`,
//! always written whole. Missing fields fall back to their defaults on read;
//! an out-of-range font size is kept until the next adjustment.

use super::json_file::{read_json, write_json};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Smallest font size reachable by adjustment
pub const MIN_FONT_SIZE: i64 = 10;
/// Largest font size reachable by adjustment
pub const MAX_FONT_SIZE: i64 = 40;
/// Font size when none is stored
pub const DEFAULT_FONT_SIZE: i64 = 16;
/// Theme when none (or an unknown one) is stored
pub const DEFAULT_THEME: &str = "Dark";
/// Themes the reader knows how to draw
pub const KNOWN_THEMES: [&str; 4] = ["Light", "Dark", "Parchment", "Gold"];

/// Persisted reader preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Active translation identifier
    pub translation: Option<String>,
    /// Verse font size
    pub font_size: i64,
    /// Theme name
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translation: None,
            font_size: DEFAULT_FONT_SIZE,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Settings {
    /// Read fields one by one so a bad field only loses itself
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            return defaults;
        };
        Self {
            translation: map
                .get("translation")
                .and_then(Value::as_str)
                .map(str::to_string),
            font_size: map
                .get("font_size")
                .and_then(Value::as_i64)
                .unwrap_or(defaults.font_size),
            theme: map
                .get("theme")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.theme),
        }
    }

    /// Load settings; a missing or malformed file gives the defaults
    pub fn load_from_file(path: &Path) -> Self {
        read_json(path)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    /// Overwrite the settings file with this record
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    /// Change the font size by `delta`, clamped to 10..=40
    pub fn adjust_font(&mut self, delta: i64) -> i64 {
        self.font_size = self
            .font_size
            .saturating_add(delta)
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.font_size
    }

    /// Set the theme if it is a known one
    pub fn set_theme(&mut self, theme: &str) -> bool {
        if KNOWN_THEMES.contains(&theme) {
            self.theme = theme.to_string();
            true
        } else {
            false
        }
    }

    /// The theme to draw with; unknown stored themes fall back to Dark
    pub fn effective_theme(&self) -> &str {
        if KNOWN_THEMES.contains(&self.theme.as_str()) {
            &self.theme
        } else {
            DEFAULT_THEME
        }
    }
}

/// Load settings from a file
pub fn load_settings(path: &Path) -> Settings {
    Settings::load_from_file(path)
}

/// Save settings to a file
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    settings.save_to_file(path)
}
