//! `fuelprices catalog`: list categories and their page URLs.

use anyhow::Result;
use fuelprices_core::config::FetchConfig;

pub fn run_catalog(cfg: &FetchConfig) -> Result<()> {
    let selected = cfg.selected_categories()?;
    for category in fuelprices_core::catalog::CATALOG {
        let marker = if selected.contains(&category) { "*" } else { " " };
        println!(
            "{} {:<18} {}",
            marker,
            category.name,
            category.page_url(cfg.base())
        );
    }
    Ok(())
}
