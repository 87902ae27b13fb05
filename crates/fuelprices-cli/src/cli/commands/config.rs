//! `fuelprices config`: where the config lives and what it resolves to.

use anyhow::Result;
use fuelprices_core::config::{self, FetchConfig};

pub fn run_config(cfg: &FetchConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
