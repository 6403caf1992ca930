//! Book-name normalization
//!
//! Maps spelling and spacing variants of a book name ("psalm", "1samuel",
//! "Song of Songs") onto the canonical label. Unknown names come back
//! untouched so non-canonical corpora still display.

use super::canon::{NEW_TESTAMENT, OLD_TESTAMENT};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("Invalid regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Irregular spellings that cannot be derived from the canonical labels
const EXTRA_VARIANTS: &[(&str, &str)] = &[
    ("psalm", "Psalms"),
    ("song of songs", "Song of Solomon"),
    ("songs of solomon", "Song of Solomon"),
    ("song of songs of solomon", "Song of Solomon"),
    ("canticles", "Song of Solomon"),
    ("canticle of canticles", "Song of Solomon"),
    ("qoheleth", "Ecclesiastes"),
    ("acts of the apostles", "Acts"),
    ("the acts", "Acts"),
    ("revelations", "Revelation"),
    ("the revelation", "Revelation"),
    ("revelation of john", "Revelation"),
    ("apocalypse", "Revelation"),
];

/// Ordinal spellings accepted in front of numbered books
const ORDINALS: &[(&str, &[&str])] = &[
    ("1", &["i", "1st", "first"]),
    ("2", &["ii", "2nd", "second"]),
    ("3", &["iii", "3rd", "third"]),
];

static VARIANTS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for label in OLD_TESTAMENT.iter().chain(NEW_TESTAMENT.iter()) {
        let key = label.to_lowercase();
        if let Some((number, name)) = key.split_once(' ').filter(|(n, _)| is_ordinal_digit(n)) {
            table.insert(format!("{}{}", number, name), *label);
            if let Some((_, spellings)) = ORDINALS.iter().find(|(d, _)| *d == number) {
                for spelling in spellings.iter() {
                    table.insert(format!("{} {}", spelling, name), *label);
                }
            }
        }
        table.insert(key, *label);
    }

    for (variant, label) in EXTRA_VARIANTS {
        table.insert((*variant).to_string(), *label);
    }

    table
});

fn is_ordinal_digit(s: &str) -> bool {
    matches!(s, "1" | "2" | "3")
}

/// Reduce a name to its lookup key: lowercase, no punctuation, single spaces
pub fn simplify(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    WHITESPACE.replace_all(stripped.trim(), " ").into_owned()
}

/// Map a raw book name to its canonical label
///
/// Never fails; unmatched input is returned verbatim.
pub fn normalize(raw: &str) -> String {
    match VARIANTS.get(&simplify(raw)) {
        Some(label) => (*label).to_string(),
        None => raw.to_string(),
    }
}
