//! Canonical book order
//!
//! The traditional 66-book sequence, split into the 39 Old Testament and
//! 27 New Testament books. Labels must match exactly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Old Testament books in canonical order
pub const OLD_TESTAMENT: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

/// New Testament books in canonical order
pub const NEW_TESTAMENT: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Which part of the canon a book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Testament {
    OldTestament,
    NewTestament,
    Other,
}

impl Testament {
    /// Heading used when grouping books for display
    pub fn heading(&self) -> &'static str {
        match self {
            Testament::OldTestament => "Old Testament",
            Testament::NewTestament => "New Testament",
            Testament::Other => "Other",
        }
    }
}

/// Classify a book label
pub fn classify(label: &str) -> Testament {
    if OLD_TESTAMENT.contains(&label) {
        Testament::OldTestament
    } else if NEW_TESTAMENT.contains(&label) {
        Testament::NewTestament
    } else {
        Testament::Other
    }
}

/// Position of a book in the 66-book sequence, if canonical
pub fn order_index(label: &str) -> Option<usize> {
    OLD_TESTAMENT
        .iter()
        .chain(NEW_TESTAMENT.iter())
        .position(|b| *b == label)
}

/// Display ordering: canonical books first in sequence, then the rest by label
pub fn compare_books(a: &str, b: &str) -> Ordering {
    match (order_index(a), order_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(OLD_TESTAMENT.len(), 39);
        assert_eq!(NEW_TESTAMENT.len(), 27);
        assert_eq!(OLD_TESTAMENT[0], "Genesis");
        assert_eq!(OLD_TESTAMENT[38], "Malachi");
        assert_eq!(NEW_TESTAMENT[0], "Matthew");
        assert_eq!(NEW_TESTAMENT[26], "Revelation");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("Genesis"), Testament::OldTestament);
        assert_eq!(classify("Song of Solomon"), Testament::OldTestament);
        assert_eq!(classify("3 John"), Testament::NewTestament);
        assert_eq!(classify("Tobit"), Testament::Other);
        assert_eq!(classify("genesis"), Testament::Other);
    }

    #[test]
    fn test_order_index() {
        assert_eq!(order_index("Genesis"), Some(0));
        assert_eq!(order_index("Malachi"), Some(38));
        assert_eq!(order_index("Matthew"), Some(39));
        assert_eq!(order_index("Revelation"), Some(65));
        assert_eq!(order_index("Enoch"), None);
    }

    #[test]
    fn test_compare_books_puts_other_last() {
        let mut books = vec!["Tobit", "John", "Baruch", "Genesis", "Revelation", "Psalms"];
        books.sort_by(|a, b| compare_books(a, b));
        assert_eq!(
            books,
            vec!["Genesis", "Psalms", "John", "Revelation", "Baruch", "Tobit"]
        );
    }
}
