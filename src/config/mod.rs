//! Configuration module for lectio
//!
//! Application config (TOML + environment), path resolution and search options.

pub mod app_config;
pub mod path_resolver;
mod search_config;

pub use app_config::AppConfig;
pub use search_config::{SearchConfig, DEFAULT_MAX_RESULTS};
