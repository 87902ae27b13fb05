//! The fetch run: walk the catalog, discover bulletin links on each page and
//! download the ones not yet on disk.
//!
//! Strictly sequential. The first error aborts the run; a rerun picks up where
//! it stopped because already-present files are skipped.

use std::fs;

use crate::catalog::Category;
use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};
use crate::links;
use crate::storage;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Catalog pages fetched.
    pub pages: usize,
    /// `./files` links discovered across all pages.
    pub links: usize,
    pub downloaded: usize,
    /// Links whose local file already existed.
    pub skipped: usize,
    /// Links a dry run would have downloaded.
    pub planned: usize,
}

/// Runs one fetch pass over the configured categories.
pub fn fetch_data(cfg: &FetchConfig) -> Result<FetchSummary, FetchError> {
    cfg.validate()?;
    let opts = cfg.http_options();
    let mut summary = FetchSummary::default();

    for category in cfg.selected_categories()? {
        fetch_category(cfg, &category, &opts, &mut summary)?;
    }

    tracing::info!(
        pages = summary.pages,
        links = summary.links,
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        planned = summary.planned,
        "fetch run finished"
    );
    Ok(summary)
}

fn fetch_category(
    cfg: &FetchConfig,
    category: &Category,
    opts: &HttpOptions,
    summary: &mut FetchSummary,
) -> Result<(), FetchError> {
    let page_url = category.page_url(cfg.base());
    tracing::debug!(category = category.name, "fetching page {}", page_url);
    let page = http::get_page(&page_url, opts)?;
    summary.pages += 1;

    if !page.is_success() {
        if !cfg.lenient_page_status {
            return Err(FetchError::HttpStatus {
                url: page_url,
                status: page.status,
            });
        }
        tracing::warn!(
            category = category.name,
            "page {} returned HTTP {}; parsing body anyway",
            page_url,
            page.status
        );
    }

    let hrefs = links::extract_file_links(&page.text());
    tracing::debug!(category = category.name, "found {} file link(s)", hrefs.len());
    for href in &hrefs {
        summary.links += 1;
        fetch_link(cfg, category, href, opts, summary)?;
    }
    Ok(())
}

fn fetch_link(
    cfg: &FetchConfig,
    category: &Category,
    href: &str,
    opts: &HttpOptions,
    summary: &mut FetchSummary,
) -> Result<(), FetchError> {
    // Local path from the raw href, remote URL from the cleaned one.
    let file_path = storage::local_path(&cfg.storage_root, category, href);
    if storage::is_present(&file_path) {
        tracing::debug!("skipping {}: already present", file_path.display());
        summary.skipped += 1;
        return Ok(());
    }

    let file_url = format!("{}/{}", cfg.base(), links::normalize_link(href));
    if cfg.dry_run {
        tracing::info!("would download file {} to {}", file_url, file_path.display());
        summary.planned += 1;
        return Ok(());
    }

    tracing::info!("Downloading file {}", file_url);
    let mut file = storage::create_file(&file_path)?;
    match http::download_to(&file_url, &mut file, &file_path, opts) {
        Ok(bytes) => {
            tracing::debug!("wrote {} bytes to {}", bytes, file_path.display());
            summary.downloaded += 1;
            Ok(())
        }
        Err(err @ FetchError::HttpStatus { .. }) => {
            // An error page is not a bulletin; leave nothing behind so a rerun retries it.
            drop(file);
            if let Err(e) = fs::remove_file(&file_path) {
                tracing::warn!("could not remove {}: {}", file_path.display(), e);
            }
            Err(err)
        }
        Err(err) => Err(err),
    }
}
