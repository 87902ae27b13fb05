//! `fuelprices fetch`: one pass over the catalog.

use anyhow::{Context, Result};
use fuelprices_core::config::FetchConfig;
use fuelprices_core::fetch_data;
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct FetchOverrides {
    pub categories: Vec<String>,
    pub storage_root: Option<PathBuf>,
    pub base_url: Option<String>,
    pub dry_run: bool,
    pub lenient_page_status: bool,
}

impl FetchOverrides {
    pub fn apply(self, mut cfg: FetchConfig) -> FetchConfig {
        if !self.categories.is_empty() {
            cfg.categories = Some(self.categories);
        }
        if let Some(root) = self.storage_root {
            cfg.storage_root = root;
        }
        if let Some(url) = self.base_url {
            cfg.base_url = url;
        }
        cfg.dry_run |= self.dry_run;
        cfg.lenient_page_status |= self.lenient_page_status;
        cfg
    }
}

pub fn run_fetch(cfg: FetchConfig, overrides: FetchOverrides) -> Result<()> {
    let cfg = overrides.apply(cfg);
    tracing::info!(
        "fetching from {} into {}",
        cfg.base(),
        cfg.storage_root.display()
    );
    let summary = fetch_data(&cfg).context("fetch run aborted")?;

    if cfg.dry_run {
        println!(
            "{} page(s), {} link(s): {} to download, {} already present",
            summary.pages, summary.links, summary.planned, summary.skipped
        );
    } else {
        println!(
            "{} page(s), {} link(s): {} downloaded, {} already present",
            summary.pages, summary.links, summary.downloaded, summary.skipped
        );
    }
    Ok(())
}
