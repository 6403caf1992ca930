//! Path resolution module for lectio
//!
//! Provides utilities for resolving file paths with support for:
//! - Absolute paths (returned as-is)
//! - Tilde (~) expansion to home directory
//! - Relative paths (resolved from current directory)
//! - XDG Base Directory specification compliance
//! - Locating the reader's data folder

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "lectio";

/// Name of the data folder searched for next to the executable and in the cwd
pub const DATA_FOLDER: &str = "data";

/// Expand tilde (~) in path to home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if path.starts_with('~') && std::env::var_os("HOME").is_none() {
        return Err(anyhow!("HOME environment variable not set"));
    }
    Ok(PathBuf::from(shellexpand::tilde(path).into_owned()))
}

/// Resolve a path to an absolute path
///
/// Resolution order:
/// 1. Expand ~ to home directory
/// 2. If absolute, return as-is
/// 3. If relative, resolve from current directory
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = expand_home(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let current_dir = std::env::current_dir()
            .map_err(|e| anyhow!("Failed to get current directory: {}", e))?;
        Ok(current_dir.join(expanded))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the XDG config directory for lectio
///
/// Returns: $XDG_CONFIG_HOME/lectio or ~/.config/lectio
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_NAME)
    } else if let Some(dirs) = project_dirs() {
        dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".config").join(APP_NAME)
    }
}

/// Get the XDG data directory for lectio
///
/// Returns: $XDG_DATA_HOME/lectio or ~/.local/share/lectio
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join(APP_NAME)
    } else if let Some(dirs) = project_dirs() {
        dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".local").join("share").join(APP_NAME)
    }
}

/// Get the default config file path
pub fn get_default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the directory of the current executable
pub fn get_exe_dir() -> Result<PathBuf> {
    let exe_path =
        std::env::current_exe().map_err(|e| anyhow!("Failed to get executable path: {}", e))?;
    exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| anyhow!("Executable has no parent directory"))
}

/// Candidate data folders, in lookup order
pub fn data_dir_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe_dir) = get_exe_dir() {
        candidates.push(exe_dir.join(DATA_FOLDER));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(DATA_FOLDER));
    }
    candidates
}

/// Pick the data folder
///
/// An explicit directory wins. Otherwise the first existing candidate from
/// [`data_dir_candidates`], else the user data directory, created if missing.
pub fn resolve_data_dir(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return resolve_path(dir);
    }

    if let Some(found) = first_existing(&data_dir_candidates()) {
        return Ok(found);
    }

    let fallback = get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&fallback) {
        tracing::warn!("Could not create data directory {:?}: {}", fallback, e);
    }
    Ok(fallback)
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|c| c.is_dir()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_with_tilde() {
        let result = expand_home("~").unwrap();
        assert!(!result.to_str().unwrap().contains('~'));
    }

    #[test]
    fn test_expand_home_with_subdir() {
        let result = expand_home("~/test").unwrap();
        assert!(result.to_str().unwrap().ends_with("/test"));
    }

    #[test]
    fn test_expand_home_absolute() {
        let result = expand_home("/absolute/path").unwrap();
        assert_eq!(result.to_str().unwrap(), "/absolute/path");
    }

    #[test]
    fn test_get_config_dir_contains_lectio() {
        let dir = get_config_dir();
        assert!(dir.to_str().unwrap().contains("lectio"));
    }

    #[test]
    fn test_get_data_dir_contains_lectio() {
        let dir = get_data_dir();
        assert!(dir.to_str().unwrap().contains("lectio"));
    }

    #[test]
    fn test_resolve_data_dir_explicit() {
        let result = resolve_data_dir(Some("/srv/bibles")).unwrap();
        assert_eq!(result, PathBuf::from("/srv/bibles"));
    }

    #[test]
    fn test_first_existing() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing");
        let present = temp.path().to_path_buf();
        assert_eq!(first_existing(&[missing.clone(), present.clone()]), Some(present));
        assert_eq!(first_existing(&[missing]), None);
    }
}
