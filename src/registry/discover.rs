//! Translation discovery
//!
//! Finds translation files under a data root: `*.json` directly under the
//! root, plus `*_bible.json` one directory down.

use crate::persist::{BOOKMARKS_FILE, SETTINGS_FILE};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix of translation bundles stored in subdirectories
pub const BUNDLE_SUFFIX: &str = "_bible.json";

/// Discovered translations: identifier -> file, in discovery order
pub type Discovered = Vec<(String, PathBuf)>;

fn is_reserved(name: &str) -> bool {
    name == BOOKMARKS_FILE || name == SETTINGS_FILE
}

fn stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Record an identifier; a repeated identifier keeps its slot but takes the new path
fn record(found: &mut Discovered, id: String, path: PathBuf) {
    match found.iter_mut().find(|(existing, _)| *existing == id) {
        Some(entry) => {
            tracing::debug!("Translation {} found again at {:?}, replacing", id, path);
            entry.1 = path;
        }
        None => found.push((id, path)),
    }
}

/// Scan a data root for translation files
///
/// Top-level files come first (by file name), then bundles in
/// subdirectories (by directory, then file name). A missing or unreadable
/// root yields an empty list.
pub fn discover(data_root: &Path) -> Discovered {
    let mut found = Discovered::new();

    if !data_root.is_dir() {
        tracing::warn!("Data directory not found: {:?}", data_root);
        return found;
    }

    let top_level = WalkDir::new(data_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file());

    for entry in top_level {
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".json") || is_reserved(&name) {
            continue;
        }
        if let Some(id) = stem(entry.path()) {
            record(&mut found, id, entry.path().to_path_buf());
        }
    }

    let bundles = WalkDir::new(data_root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file());

    for entry in bundles {
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(BUNDLE_SUFFIX) {
            continue;
        }
        if let Some(id) = stem(entry.path()) {
            record(&mut found, id, entry.path().to_path_buf());
        }
    }

    tracing::debug!("Discovered {} translation(s) in {:?}", found.len(), data_root);
    found
}
