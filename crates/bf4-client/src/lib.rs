//! HTTP client and equity endpoints for the Börse Frankfurt data API.
//!
//! This crate provides the request plumbing and the endpoint bindings:
//!
//! - [`ApiClient`] - Pooled HTTP client wrapping the shared `/data` request path
//! - [`ClientConfig`] - Venue, page-size, and transport settings
//! - [`fetch_paged`] - Chunked fetch loop used by the history endpoints
//! - Equity endpoint methods on [`ApiClient`] (master data, key data,
//!   bid/ask history, time/sales, price history, historical key figures,
//!   dividends, related indices)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bf4rs/bf4/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod equities;
mod paged;
mod timestamp;

pub use client::{ApiClient, ClientConfig, DEFAULT_BASE_URL};
pub use paged::{PagedQuery, fetch_paged};
