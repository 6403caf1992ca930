//! Snippet extraction and highlighting
//!
//! All matching is case-insensitive on the literal query. Windows are
//! measured in characters, highlight spans in bytes of the snippet.

use serde::{Deserialize, Serialize};

/// Characters kept before the first match
pub const CONTEXT_BEFORE: usize = 30;
/// Characters kept after the end of the first match
pub const CONTEXT_AFTER: usize = 60;
/// Length of the fallback snippet when the text itself did not match
pub const PREVIEW_CHARS: usize = 140;
/// Marker for elided text
pub const ELLIPSIS: &str = "...";

/// Byte range of a highlighted occurrence within a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// A run of snippet text, highlighted or plain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Lowercased text that remembers which original char each lowered char came from
struct Folded {
    lower: String,
    /// Original char index for every char of `lower`
    origin: Vec<usize>,
}

impl Folded {
    /// Folds with `str::to_lowercase`, the same rule the matcher uses
    ///
    /// The only context-dependent mapping there (final sigma) is one char to
    /// one char, so per-char expansion lengths line up with `lower`.
    fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut origin = Vec::with_capacity(lower.len());
        for (i, c) in text.chars().enumerate() {
            origin.extend(std::iter::repeat(i).take(c.to_lowercase().count()));
        }
        debug_assert_eq!(origin.len(), lower.chars().count());
        Self { lower, origin }
    }

    /// Char range in the original text of the first occurrence at or after byte `from` of `lower`
    fn find_from(&self, needle: &str, from: usize) -> Option<(usize, usize, usize)> {
        let rel = self.lower[from..].find(needle)?;
        let start_byte = from + rel;
        let end_byte = start_byte + needle.len();
        let start_char = self.lower[..start_byte].chars().count();
        let end_char = start_char + self.lower[start_byte..end_byte].chars().count();
        let orig_start = self.origin[start_char];
        let orig_end = self.origin[end_char - 1] + 1;
        Some((orig_start, orig_end, end_byte))
    }
}

/// Char range of the first case-insensitive occurrence of `query` in `text`
pub fn find_ignore_case(text: &str, query: &str) -> Option<(usize, usize)> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    Folded::new(text)
        .find_from(&needle, 0)
        .map(|(start, end, _)| (start, end))
}

fn char_slice(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

/// Build the preview snippet for a matching verse
///
/// With the query in the text: up to 30 chars before the first occurrence and
/// 60 after it, with ellipses where the window was cut. Otherwise the first
/// 140 chars.
pub fn make_snippet(text: &str, query: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    match find_ignore_case(text, query) {
        Some((idx, match_end)) => {
            let start = idx.saturating_sub(CONTEXT_BEFORE);
            let end = (match_end + CONTEXT_AFTER).min(chars.len());
            let window = char_slice(&chars, start, end);
            let mut snippet = window.trim().to_string();
            if start > 0 {
                snippet.insert_str(0, ELLIPSIS);
            }
            if end < chars.len() {
                snippet.push_str(ELLIPSIS);
            }
            snippet
        }
        None => {
            let mut snippet = char_slice(&chars, 0, chars.len().min(PREVIEW_CHARS));
            if chars.len() > PREVIEW_CHARS {
                snippet.push_str(ELLIPSIS);
            }
            snippet
        }
    }
}

/// Every non-overlapping case-insensitive occurrence of `query` in `snippet`
pub fn highlight_spans(snippet: &str, query: &str) -> Vec<HighlightSpan> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let folded = Folded::new(snippet);
    let byte_of_char: Vec<usize> = snippet
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(snippet.len()))
        .collect();

    let mut spans = Vec::new();
    let mut from = 0;
    while let Some((start, end, next)) = folded.find_from(&needle, from) {
        spans.push(HighlightSpan {
            start: byte_of_char[start],
            end: byte_of_char[end],
        });
        from = next;
    }
    spans
}

/// Split a snippet into alternating plain and highlighted runs
pub fn runs<'a>(snippet: &'a str, spans: &[HighlightSpan]) -> Vec<TextRun<'a>> {
    let mut out = Vec::new();
    let mut pos = 0;
    for span in spans {
        if span.start < pos || span.end > snippet.len() {
            continue;
        }
        if span.start > pos {
            out.push(TextRun {
                text: &snippet[pos..span.start],
                highlighted: false,
            });
        }
        out.push(TextRun {
            text: &snippet[span.start..span.end],
            highlighted: true,
        });
        pos = span.end;
    }
    if pos < snippet.len() {
        out.push(TextRun {
            text: &snippet[pos..],
            highlighted: false,
        });
    }
    out
}
