//! Core types for the bf4 Börse Frankfurt data client.
//!
//! This crate provides the fundamental data structures used throughout bf4:
//!
//! - [`Bf4Error`] - The shared error enum for request and decoding failures
//! - [`Mic`] - Market Identifier Code of the queried trading venue
//! - [`Page`] - One page of a chunked endpoint response

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bf4rs/bf4/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod mic;
mod page;

pub use error::{Bf4Error, Result};
pub use mic::Mic;
pub use page::Page;
