//! CLI command handlers, one per file.

mod catalog;
mod config;
mod fetch;

pub use catalog::run_catalog;
pub use config::run_config;
pub use fetch::{run_fetch, FetchOverrides};
