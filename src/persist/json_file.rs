//! Whole-file JSON read/write shared by the bookmark and settings stores

use crate::error::{LectioError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Read a JSON file; missing, unreadable or malformed files yield `None`
pub(crate) fn read_json(path: &Path) -> Option<Value> {
    if !path.exists() {
        tracing::debug!("{:?} does not exist yet", path);
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed JSON in {:?}: {}", path, e);
            None
        }
    }
}

/// Rewrite a JSON file in full, creating its directory if needed
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LectioError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| LectioError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("file.json");
        write_json(&path, &json!({"a": 1})).unwrap();
        assert_eq!(read_json(&path), Some(json!({"a": 1})));
    }

    #[test]
    fn test_read_missing_and_malformed() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_json(&dir.path().join("none.json")), None);

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{oops").unwrap();
        assert_eq!(read_json(&bad), None);
    }
}
