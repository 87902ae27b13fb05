pub mod config;
pub mod logging;

pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod links;
pub mod storage;

pub use error::FetchError;
pub use fetcher::{fetch_data, FetchSummary};
