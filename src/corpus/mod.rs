//! Corpus module
//!
//! The in-memory model of one translation plus the helpers that order and
//! name its books.

pub mod canon;
mod library;
pub mod normalize;
pub mod ordering;
mod store;

pub use canon::Testament;
pub use library::{
    citation, display_order, find_book, library, reference, LibraryEntry, LibraryGroup,
};
pub use normalize::normalize;
pub use ordering::{compare_keys, sorted_keys};
pub use store::{Book, Chapter, CorpusLoad, CorpusStore, EmptyReason, Verse};
