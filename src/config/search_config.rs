//! Search configuration structures

use serde::{Deserialize, Serialize};

/// Default cap on search results
pub const DEFAULT_MAX_RESULTS: usize = 500;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop scanning once this many verses matched
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result cap
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_default() {
        assert_eq!(SearchConfig::default().max_results, 500);
    }

    #[test]
    fn test_search_config_builder() {
        let config = SearchConfig::new().with_max_results(5);
        assert_eq!(config.max_results, 5);
    }
}
