//! Corpus store implementation
//!
//! Holds the verse text of one translation as book -> chapter -> verse.
//! Both source shapes (nested map and flat record list) are folded into this
//! one representation at load time.

use super::ordering::{compare_keys, sort_keys};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// A single verse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Verse number as authored ("16")
    pub number: String,
    /// Verse text
    pub text: String,
}

/// One chapter: verse number -> text, in load order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    key: String,
    verses: Vec<Verse>,
    positions: HashMap<String, usize>,
}

impl Chapter {
    fn new(key: String) -> Self {
        Self {
            key,
            verses: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn insert(&mut self, number: String, text: String) {
        match self.positions.get(&number) {
            Some(&pos) => self.verses[pos].text = text,
            None => {
                self.positions.insert(number.clone(), self.verses.len());
                self.verses.push(Verse { number, text });
            }
        }
    }

    /// Chapter key ("3")
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Verses in load order
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// Verses in numeric order
    pub fn verses_in_order(&self) -> Vec<&Verse> {
        let mut verses: Vec<&Verse> = self.verses.iter().collect();
        sort_keys(&mut verses, |v| v.number.as_str());
        verses
    }

    /// Text of a verse
    pub fn verse(&self, number: &str) -> Option<&str> {
        self.positions
            .get(number)
            .map(|&pos| self.verses[pos].text.as_str())
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// One book: chapter key -> chapter, in load order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    label: String,
    chapters: Vec<Chapter>,
    positions: HashMap<String, usize>,
}

impl Book {
    fn new(label: String) -> Self {
        Self {
            label,
            chapters: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn chapter_mut(&mut self, key: String) -> &mut Chapter {
        let pos = match self.positions.get(&key) {
            Some(&pos) => pos,
            None => {
                self.positions.insert(key.clone(), self.chapters.len());
                self.chapters.push(Chapter::new(key));
                self.chapters.len() - 1
            }
        };
        &mut self.chapters[pos]
    }

    /// Book label, exact case as authored
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Chapters in load order
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Chapter keys in numeric order
    pub fn chapter_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.chapters.iter().map(|c| c.key()).collect();
        sort_keys(&mut keys, |k| *k);
        keys
    }

    /// Look up a chapter by key
    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.positions.get(key).map(|&pos| &self.chapters[pos])
    }

    /// Look up a chapter by key using the numeric-aware comparison ("03" finds "3")
    pub fn find_chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapter(key).or_else(|| {
            self.chapters
                .iter()
                .find(|c| compare_keys(c.key(), key).is_eq())
        })
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

/// Why a load produced no corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The source file does not exist
    Missing,
    /// The source could not be read
    Unreadable(String),
    /// The bytes are not valid JSON
    Malformed(String),
    /// The JSON root is neither an object nor an array
    UnsupportedRoot,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::Missing => write!(f, "file not found"),
            EmptyReason::Unreadable(e) => write!(f, "unreadable: {}", e),
            EmptyReason::Malformed(e) => write!(f, "malformed JSON: {}", e),
            EmptyReason::UnsupportedRoot => write!(f, "root is neither an object nor an array"),
        }
    }
}

/// Outcome of loading a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusLoad {
    Loaded(CorpusStore),
    Empty(EmptyReason),
}

impl CorpusLoad {
    /// The loaded store, or an empty one
    pub fn into_store(self) -> CorpusStore {
        match self {
            CorpusLoad::Loaded(store) => store,
            CorpusLoad::Empty(_) => CorpusStore::default(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CorpusLoad::Loaded(_))
    }

    pub fn empty_reason(&self) -> Option<&EmptyReason> {
        match self {
            CorpusLoad::Loaded(_) => None,
            CorpusLoad::Empty(reason) => Some(reason),
        }
    }
}

/// The two accepted source shapes, decided once at the ingestion boundary
enum RawCorpus {
    /// `{book: {chapter: {verse: text}}}`
    Nested(Map<String, Value>),
    /// `[{book, chapter, verse, text}, ...]`
    Flat(Vec<Value>),
}

impl RawCorpus {
    fn classify(root: Value) -> Option<Self> {
        match root {
            Value::Object(map) => Some(RawCorpus::Nested(map)),
            Value::Array(records) => Some(RawCorpus::Flat(records)),
            _ => None,
        }
    }
}

/// Decoded verse data for one translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStore {
    books: Vec<Book>,
    positions: HashMap<String, usize>,
}

impl CorpusStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from (book, chapter, verse, text) tuples; later duplicates win
    pub fn from_verses<I, B, C, V, T>(verses: I) -> Self
    where
        I: IntoIterator<Item = (B, C, V, T)>,
        B: Into<String>,
        C: Into<String>,
        V: Into<String>,
        T: Into<String>,
    {
        let mut store = Self::new();
        for (book, chapter, verse, text) in verses {
            store.insert(book.into(), chapter.into(), verse.into(), text.into());
        }
        store
    }

    /// Parse a translation from raw bytes
    pub fn load(bytes: &[u8]) -> CorpusLoad {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(root) => Self::from_value(root),
            Err(e) => {
                tracing::warn!("Failed to parse translation data: {}", e);
                CorpusLoad::Empty(EmptyReason::Malformed(e.to_string()))
            }
        }
    }

    /// Load a translation file
    pub fn load_from_file(path: &Path) -> CorpusLoad {
        if !path.exists() {
            tracing::warn!("Translation file not found: {:?}", path);
            return CorpusLoad::Empty(EmptyReason::Missing);
        }
        match std::fs::read(path) {
            Ok(bytes) => {
                let outcome = Self::load(&bytes);
                if let CorpusLoad::Loaded(store) = &outcome {
                    tracing::debug!("Loaded {} books from {:?}", store.len(), path);
                }
                outcome
            }
            Err(e) => {
                tracing::warn!("Failed to read translation file {:?}: {}", path, e);
                CorpusLoad::Empty(EmptyReason::Unreadable(e.to_string()))
            }
        }
    }

    /// Normalize an already-parsed JSON value
    pub fn from_value(root: Value) -> CorpusLoad {
        let Some(raw) = RawCorpus::classify(root) else {
            tracing::warn!("Translation root is neither an object nor an array");
            return CorpusLoad::Empty(EmptyReason::UnsupportedRoot);
        };

        let mut store = Self::new();
        match raw {
            RawCorpus::Nested(books) => store.fold_nested(books),
            RawCorpus::Flat(records) => store.fold_flat(records),
        }
        CorpusLoad::Loaded(store)
    }

    fn fold_nested(&mut self, books: Map<String, Value>) {
        for (book, chapters) in books {
            let Value::Object(chapters) = chapters else {
                tracing::debug!("Skipping book {:?}: chapters are not an object", book);
                continue;
            };
            for (chapter, verses) in chapters {
                let Value::Object(verses) = verses else {
                    tracing::debug!("Skipping {} {}: verses are not an object", book, chapter);
                    continue;
                };
                for (verse, text) in verses {
                    if let Some(text) = scalar_text(&text) {
                        self.insert(book.clone(), chapter.clone(), verse, text);
                    }
                }
            }
        }
    }

    fn fold_flat(&mut self, records: Vec<Value>) {
        for record in records {
            let Value::Object(record) = record else {
                continue;
            };
            let book = match record.get("book") {
                Some(Value::String(book)) => book.clone(),
                _ => continue,
            };
            let (Some(chapter), Some(verse)) = (
                record.get("chapter").and_then(key_text),
                record.get("verse").and_then(key_text),
            ) else {
                continue;
            };
            let text = record.get("text").and_then(scalar_text).unwrap_or_default();
            self.insert(book, chapter, verse, text);
        }
    }

    fn insert(&mut self, book: String, chapter: String, verse: String, text: String) {
        let chapter = chapter.trim().to_string();
        let verse = verse.trim().to_string();
        if chapter.is_empty() || verse.is_empty() {
            return;
        }
        let pos = match self.positions.get(&book) {
            Some(&pos) => pos,
            None => {
                self.positions.insert(book.clone(), self.books.len());
                self.books.push(Book::new(book));
                self.books.len() - 1
            }
        };
        self.books[pos].chapter_mut(chapter).insert(verse, text);
    }

    /// Book labels in load order
    pub fn books(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.label()).collect()
    }

    /// Books in load order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Look up a book by label
    pub fn book(&self, label: &str) -> Option<&Book> {
        self.positions.get(label).map(|&pos| &self.books[pos])
    }

    pub fn contains_book(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Chapter keys of a book in numeric order; empty for unknown books
    pub fn chapters(&self, book: &str) -> Vec<&str> {
        self.book(book).map(|b| b.chapter_keys()).unwrap_or_default()
    }

    /// (verse, text) pairs of a chapter in numeric order; empty for unknown keys
    pub fn verses(&self, book: &str, chapter: &str) -> Vec<(&str, &str)> {
        self.book(book)
            .and_then(|b| b.chapter(chapter))
            .map(|c| {
                c.verses_in_order()
                    .into_iter()
                    .map(|v| (v.number.as_str(), v.text.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Verses of a chapter starting at the first verse numbered `start` or later
    ///
    /// An empty start, or one past the last verse, returns the whole chapter.
    pub fn verses_from(&self, book: &str, chapter: &str, start: Option<&str>) -> Vec<(&str, &str)> {
        let verses = self.verses(book, chapter);
        let start = match start.map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return verses,
        };
        let from = verses
            .iter()
            .position(|(number, _)| compare_keys(number, start).is_ge())
            .unwrap_or(0);
        verses[from..].to_vec()
    }

    /// Text of a single verse
    pub fn verse(&self, book: &str, chapter: &str, verse: &str) -> Option<&str> {
        self.book(book)?.chapter(chapter)?.verse(verse)
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Total number of verses
    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters())
            .map(|c| c.len())
            .sum()
    }
}

/// Serializes in the nested shape, preserving load order
impl Serialize for CorpusStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct ChapterMap<'a>(&'a Chapter);
        struct BookMap<'a>(&'a Book);

        impl Serialize for ChapterMap<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for verse in self.0.verses() {
                    map.serialize_entry(&verse.number, &verse.text)?;
                }
                map.end()
            }
        }

        impl Serialize for BookMap<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.chapter_count()))?;
                for chapter in self.0.chapters() {
                    map.serialize_entry(chapter.key(), &ChapterMap(chapter))?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.books.len()))?;
        for book in &self.books {
            map.serialize_entry(book.label(), &BookMap(book))?;
        }
        map.end()
    }
}

/// Verse text from a JSON scalar; objects, arrays and null are rejected
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Chapter/verse key from a flat record field (`3` or `"3"`)
fn key_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
