use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::catalog::ITEMS_PER_PAGE;
use crate::error::FormatError;
use crate::sort::ViewConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormatterConfig {
    pub items_per_page: usize,
    /// Sort type the UI preselects. Only reported by `catalog`; formatted
    /// output keeps the service's order unless a sort is asked for.
    pub default_sort: String,
    pub log_level: String,
    pub pretty: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            default_sort: "HIGHEST".to_string(),
            log_level: "info".to_string(),
            pretty: true,
        }
    }
}

impl FormatterConfig {
    pub fn view(&self, page: Option<usize>) -> ViewConfig {
        ViewConfig {
            items_per_page: self.items_per_page,
            page,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("discovery-formatter").join("config.toml")
}

/// Load from `path` (or the default location), then `DISCOVERY_*` env vars.
/// Anything not set keeps its default.
pub fn load_config(path: Option<&Path>) -> Result<FormatterConfig, FormatError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let defaults = FormatterConfig::default();

    let s = Config::builder()
        .set_default("items_per_page", defaults.items_per_page as u64)?
        .set_default("default_sort", defaults.default_sort)?
        .set_default("log_level", defaults.log_level)?
        .set_default("pretty", defaults.pretty)?
        .add_source(File::from(config_path).required(false))
        .add_source(Environment::with_prefix("DISCOVERY").try_parsing(true)) // e.g. DISCOVERY_ITEMS_PER_PAGE
        .build()?;

    Ok(s.try_deserialize()?)
}
