//! Library view: books grouped by testament for display

use super::canon::{classify, compare_books, Testament};
use super::normalize::normalize;
use super::store::{Book, CorpusStore};
use serde::Serialize;

/// A book entry in the library listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub book: String,
    pub chapter_count: usize,
}

/// A titled group of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryGroup {
    pub testament: Testament,
    pub heading: &'static str,
    pub books: Vec<LibraryEntry>,
}

/// Group the books of a store by testament, in canonical order
///
/// Labels are classified through [`normalize`], so "Psalm" files under
/// Psalms. `filter` keeps only books whose label contains it
/// (case-insensitive). Groups with no books are omitted.
pub fn library(store: &CorpusStore, filter: Option<&str>) -> Vec<LibraryGroup> {
    let needle = filter
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty());
    let books = ordered(store, needle.as_deref());

    [Testament::OldTestament, Testament::NewTestament, Testament::Other]
        .into_iter()
        .filter_map(|testament| {
            let entries: Vec<LibraryEntry> = books
                .iter()
                .filter(|(canonical, _)| classify(canonical) == testament)
                .map(|(_, b)| b)
                .map(|b| LibraryEntry {
                    book: b.label().to_string(),
                    chapter_count: b.chapter_count(),
                })
                .collect();
            (!entries.is_empty()).then(|| LibraryGroup {
                testament,
                heading: testament.heading(),
                books: entries,
            })
        })
        .collect()
}

/// Books of a store in display order
///
/// The same order [`library`] uses: canonical position of the normalized
/// name, then the rest by name.
pub fn display_order(store: &CorpusStore) -> Vec<&Book> {
    ordered(store, None).into_iter().map(|(_, b)| b).collect()
}

/// (normalized name, book) pairs matching `needle`, sorted for display
fn ordered<'a>(store: &'a CorpusStore, needle: Option<&str>) -> Vec<(String, &'a Book)> {
    let mut books: Vec<(String, &Book)> = store
        .iter()
        .filter(|b| needle.map_or(true, |n| b.label().to_lowercase().contains(n)))
        .map(|b| (normalize(b.label()), b))
        .collect();
    books.sort_by(|(a, _), (b, _)| compare_books(a, b));
    books
}

/// Find a book by a user-typed name
///
/// Tries the exact label, then the normalized name, then a case-insensitive match.
pub fn find_book<'a>(store: &'a CorpusStore, name: &str) -> Option<&'a Book> {
    if let Some(book) = store.book(name) {
        return Some(book);
    }
    let wanted = normalize(name);
    store
        .iter()
        .find(|b| normalize(b.label()) == wanted)
        .or_else(|| store.iter().find(|b| b.label().eq_ignore_ascii_case(name.trim())))
}

/// Short reference label: "John 3:16"
pub fn reference(book: &str, chapter: &str, verse: &str) -> String {
    format!("{} {}:{}", book, chapter, verse)
}

/// Text copied to the clipboard for a verse
pub fn citation(book: &str, chapter: &str, verse: &str, text: &str) -> String {
    format!("{} — {}", reference(book, chapter, verse), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CorpusStore {
        CorpusStore::from_verses([
            ("Tobit", "1", "1", "t"),
            ("John", "1", "1", "j"),
            ("John", "2", "1", "j"),
            ("Genesis", "1", "1", "g"),
            ("1 John", "1", "1", "j"),
        ])
    }

    #[test]
    fn test_library_groups_in_canonical_order() {
        let groups = library(&store(), None);
        let headings: Vec<_> = groups.iter().map(|g| g.heading).collect();
        assert_eq!(headings, vec!["Old Testament", "New Testament", "Other"]);

        let nt: Vec<_> = groups[1].books.iter().map(|e| e.book.as_str()).collect();
        assert_eq!(nt, vec!["John", "1 John"]);
        assert_eq!(groups[1].books[0].chapter_count, 2);
    }

    #[test]
    fn test_library_filter_drops_empty_groups() {
        let groups = library(&store(), Some("JOHN"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].testament, Testament::NewTestament);
    }

    #[test]
    fn test_library_of_empty_store() {
        assert!(library(&CorpusStore::new(), None).is_empty());
    }

    #[test]
    fn test_variant_labels_are_classified() {
        let store = CorpusStore::from_verses([("Psalm", "23", "1", "p"), ("genesis", "1", "1", "g")]);
        let groups = library(&store, None);
        assert_eq!(groups.len(), 1);
        let books: Vec<_> = groups[0].books.iter().map(|e| e.book.as_str()).collect();
        assert_eq!(books, vec!["genesis", "Psalm"]);
    }

    #[test]
    fn test_display_order_matches_library_grouping() {
        let store = CorpusStore::from_verses([
            ("Tobit", "1", "1", "t"),
            ("Psalm", "23", "1", "p"),
            ("John", "1", "1", "j"),
            ("genesis", "1", "1", "g"),
        ]);
        let order: Vec<_> = display_order(&store).iter().map(|b| b.label()).collect();
        assert_eq!(order, vec!["genesis", "Psalm", "John", "Tobit"]);

        let grouped: Vec<_> = library(&store, None)
            .into_iter()
            .flat_map(|g| g.books)
            .map(|e| e.book)
            .collect();
        assert_eq!(grouped, order);
    }

    #[test]
    fn test_find_book() {
        let store = CorpusStore::from_verses([("Psalms", "23", "1", "p"), ("Mateo", "1", "1", "m")]);
        assert_eq!(find_book(&store, "Psalms").map(|b| b.label()), Some("Psalms"));
        assert_eq!(find_book(&store, "psalm").map(|b| b.label()), Some("Psalms"));
        assert_eq!(find_book(&store, "MATEO").map(|b| b.label()), Some("Mateo"));
        assert!(find_book(&store, "Luke").is_none());
    }

    #[test]
    fn test_citation() {
        assert_eq!(reference("John", "3", "16"), "John 3:16");
        assert_eq!(
            citation("John", "3", "16", "For God so loved"),
            "John 3:16 — For God so loved"
        );
    }
}
