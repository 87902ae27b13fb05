use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{Category, CATALOG};
use crate::error::FetchError;
use crate::http::HttpOptions;

pub const DEFAULT_BASE_URL: &str = "http://www.fuelprices.gr";

/// Configuration loaded from `~/.config/fuelprices/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Site root; page and file URLs are `base_url + "/" + path`.
    pub base_url: String,
    /// Directory under which files are stored as `<category>/<href>`.
    pub storage_root: PathBuf,
    /// Category names to fetch, in catalog order. Missing or empty = all.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Parse catalog pages even when they come back with a non-2xx status.
    #[serde(default)]
    pub lenient_page_status: bool,
    /// Log what would be downloaded without writing anything.
    #[serde(default, skip_serializing)]
    pub dry_run: bool,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout. Unset means a stalled request blocks the run.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let storage_root = default_storage_root().unwrap_or_else(|_| PathBuf::from("var"));
        Self::new(DEFAULT_BASE_URL, storage_root)
    }
}

impl FetchConfig {
    /// Config for `base_url` and `storage_root` with every option at its default.
    pub fn new(base_url: impl Into<String>, storage_root: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            storage_root: storage_root.into(),
            categories: None,
            lenient_page_status: false,
            dry_run: false,
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: None,
        }
    }

    /// Base URL without trailing slashes.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Checks the base URL and category names.
    pub fn validate(&self) -> Result<(), FetchError> {
        let parsed = url::Url::parse(self.base())
            .map_err(|e| FetchError::Config(format!("base_url {:?}: {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::Config(format!(
                "base_url {:?}: scheme must be http or https",
                self.base_url
            )));
        }
        self.selected_categories().map(|_| ())
    }

    /// Categories to fetch, always in catalog order regardless of how they were listed.
    pub fn selected_categories(&self) -> Result<Vec<Category>, FetchError> {
        let names = match &self.categories {
            Some(names) if !names.is_empty() => names,
            _ => return Ok(CATALOG.to_vec()),
        };
        if let Some(unknown) = names.iter().find(|n| Category::by_name(n).is_none()) {
            let known: Vec<_> = CATALOG.iter().map(|c| c.name).collect();
            return Err(FetchError::Config(format!(
                "unknown category {:?} (expected one of {})",
                unknown,
                known.join(", ")
            )));
        }
        Ok(CATALOG
            .iter()
            .copied()
            .filter(|c| names.iter().any(|n| n == c.name))
            .collect())
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// `~/.local/share/fuelprices`.
pub fn default_storage_root() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fuelprices")?;
    Ok(xdg_dirs.get_data_home())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fuelprices")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
