//! CLI for the fuelprices bulletin fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fuelprices_core::config;
use std::path::PathBuf;

use commands::{run_catalog, run_config, run_fetch, FetchOverrides};

/// Top-level CLI for the fuelprices bulletin fetcher.
#[derive(Debug, Parser)]
#[command(name = "fuelprices")]
#[command(about = "Download fuel price bulletins published on fuelprices.gr", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every bulletin not already stored locally.
    Fetch {
        /// Only fetch this category (repeatable). Default: all categories.
        #[arg(long = "category", value_name = "NAME")]
        categories: Vec<String>,
        /// Store files under this directory instead of the configured storage root.
        #[arg(long, value_name = "DIR")]
        storage_root: Option<PathBuf>,
        /// Fetch from this site root instead of the configured base URL.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// List what would be downloaded without writing anything.
        #[arg(long)]
        dry_run: bool,
        /// Parse catalog pages even when they return an error status.
        #[arg(long)]
        lenient_page_status: bool,
    },

    /// List the bulletin categories and their catalog page URLs.
    Catalog,

    /// Show the config file path and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                categories,
                storage_root,
                base_url,
                dry_run,
                lenient_page_status,
            } => {
                let overrides = FetchOverrides {
                    categories,
                    storage_root,
                    base_url,
                    dry_run,
                    lenient_page_status,
                };
                run_fetch(cfg, overrides)?
            }
            CliCommand::Catalog => run_catalog(&cfg)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
