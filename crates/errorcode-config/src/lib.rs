#![allow(clippy::must_use_candidate)]

mod catalog;
mod env;
mod loader;
pub mod log;

use serde::Deserialize;

pub use catalog::CatalogConfig;
pub use env::ExpandError;
pub use log::{LogConfig, LogFormat};

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Templates registered on top of the built-in catalog
    #[serde(default)]
    pub catalog: CatalogConfig,
}
