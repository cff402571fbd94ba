//! Rust client library for the Börse Frankfurt market data API.
//!
//! This is a facade crate that re-exports functionality from the bf4
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use bf4_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::with_defaults()?;
//!
//!     let details = client.equity_details("DE0007236101").await?;
//!     println!("{details:#}");
//!
//!     let start = chrono::Utc::now() - chrono::TimeDelta::days(3);
//!     let end = chrono::Utc::now();
//!     let quotes = client.bid_ask_history("DE0007236101", &start, &end).await?;
//!     println!("fetched {} bid/ask quotes", quotes.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bf4rs/bf4/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use bf4_types::*;

// Re-export the API client and the paged fetch plumbing
pub use bf4_client::{ApiClient, ClientConfig, DEFAULT_BASE_URL, PagedQuery, fetch_paged};

/// Prelude module for convenient imports.
///
/// ```
/// use bf4_lib::prelude::*;
/// ```
pub mod prelude {
    pub use bf4_client::{ApiClient, ClientConfig};
    pub use bf4_types::{Bf4Error, Mic, Page, Result};
}
