//! Bookmark store
//!
//! An ordered list of (book, chapter, verse) triples persisted as
//! `{"bookmarks": [...]}`. A bare array is accepted on read.

use super::json_file::{read_json, write_json};
use crate::corpus::reference;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A bookmarked verse; identity is the whole triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl Bookmark {
    pub fn new(book: impl Into<String>, chapter: impl Into<String>, verse: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }

    /// "Book chapter:verse"
    pub fn label(&self) -> String {
        reference(&self.book, &self.chapter, &self.verse)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let book = entry.get("book")?.as_str()?;
        let chapter = key_field(entry.get("chapter")?)?;
        let verse = key_field(entry.get("verse")?)?;
        Some(Self::new(book, chapter, verse))
    }
}

fn key_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Serialize)]
struct BookmarkFile<'a> {
    bookmarks: &'a [Bookmark],
}

/// Decode bookmarks from either legacy encoding; anything else is empty
pub fn parse_bookmarks(value: &Value) -> Vec<Bookmark> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("bookmarks") {
            Some(Value::Array(entries)) => entries,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    let mut bookmarks: Vec<Bookmark> = Vec::with_capacity(entries.len());
    for entry in entries {
        match Bookmark::from_value(entry) {
            Some(b) if !bookmarks.contains(&b) => bookmarks.push(b),
            Some(_) => {}
            None => tracing::debug!("Skipping malformed bookmark entry: {}", entry),
        }
    }
    bookmarks
}

/// Read bookmarks from a file; missing or malformed files yield an empty list
pub fn load_bookmarks(path: &Path) -> Vec<Bookmark> {
    read_json(path)
        .map(|value| parse_bookmarks(&value))
        .unwrap_or_default()
}

/// Bookmarks bound to their backing file
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Load the store from a file
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookmarks = load_bookmarks(&path);
        tracing::debug!("Loaded {} bookmark(s) from {:?}", bookmarks.len(), path);
        Self { path, bookmarks }
    }

    /// Bookmarks in insertion order
    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn contains(&self, bookmark: &Bookmark) -> bool {
        self.bookmarks.contains(bookmark)
    }

    /// Append a bookmark and rewrite the file
    ///
    /// Returns `false` without touching the file if an equal bookmark exists.
    pub fn add(&mut self, bookmark: Bookmark) -> Result<bool> {
        if self.contains(&bookmark) {
            tracing::debug!("Bookmark {} already present", bookmark.label());
            return Ok(false);
        }
        self.bookmarks.push(bookmark);
        self.save()?;
        Ok(true)
    }

    /// Remove a bookmark and rewrite the file
    ///
    /// Returns `false` without touching the file if it was not present.
    pub fn remove(&mut self, bookmark: &Bookmark) -> Result<bool> {
        let Some(pos) = self.bookmarks.iter().position(|b| b == bookmark) else {
            return Ok(false);
        };
        self.bookmarks.remove(pos);
        self.save()?;
        Ok(true)
    }

    /// Write the whole list back to disk
    pub fn save(&self) -> Result<()> {
        write_json(
            &self.path,
            &BookmarkFile {
                bookmarks: &self.bookmarks,
            },
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
