//! Equity endpoints.
//!
//! One method per remote operation. Lookups issue a single request and
//! return the decoded body verbatim; history endpoints go through
//! [`fetch_paged`] and concatenate every page. ISINs are forwarded as
//! given, the server validates them.

use bf4_types::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde_json::Value;

use crate::{ApiClient, PagedQuery, fetch_paged, timestamp};

impl ApiClient {
    /// Basic master data for an equity.
    pub async fn equity_details(&self, isin: &str) -> Result<Value> {
        self.data_request("equity_master_data", &[("isin", isin.to_string())])
            .await
    }

    /// Key/technical figures for an equity.
    pub async fn key_data(&self, isin: &str) -> Result<Value> {
        self.data_request("equity_key_data", &[("isin", isin.to_string())])
            .await
    }

    /// Indices in which an equity is listed.
    pub async fn related_indices(&self, isin: &str) -> Result<Vec<Value>> {
        self.data_request("related_indices", &[("isin", isin.to_string())])
            .await
    }

    /// Best bid/ask history for an equity on the configured venue.
    ///
    /// Bounds are converted to UTC before serialization. The server keeps
    /// roughly the last two weeks for this endpoint; the requested window
    /// is not validated here.
    pub async fn bid_ask_history<Tz: TimeZone>(
        &self,
        isin: &str,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<Value>> {
        let query = PagedQuery {
            operation: "bid_ask_history",
            records_field: "data",
            page_size: self.config().bid_ask_page_size,
            params: vec![
                ("isin".to_string(), isin.to_string()),
                ("mic".to_string(), self.config().mic.to_string()),
                ("from".to_string(), timestamp::utc_param(start)),
                ("to".to_string(), timestamp::utc_param(end)),
            ],
        };

        fetch_paged(self, &query).await
    }

    /// Time/sales (executed trades) for an equity on the configured venue.
    ///
    /// Bounds are serialized from the caller's local wall clock with a `Z`
    /// appended and no timezone conversion, matching the remote endpoint's
    /// observed expectations. Retention mirrors [`Self::bid_ask_history`].
    pub async fn times_sales<Tz: TimeZone>(
        &self,
        isin: &str,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<Value>> {
        let query = PagedQuery {
            operation: "tick_data",
            records_field: "ticks",
            page_size: self.config().times_sales_page_size,
            params: vec![
                ("isin".to_string(), isin.to_string()),
                ("mic".to_string(), self.config().mic.to_string()),
                ("from".to_string(), timestamp::naive_param(start)),
                ("to".to_string(), timestamp::naive_param(end)),
            ],
        };

        fetch_paged(self, &query).await
    }

    /// Daily OHLC/volume history for an equity on the configured venue.
    pub async fn price_history(
        &self,
        isin: &str,
        min_date: NaiveDate,
        max_date: NaiveDate,
    ) -> Result<Vec<Value>> {
        let query = PagedQuery {
            operation: "price_history",
            records_field: "data",
            page_size: self.config().history_page_size,
            params: vec![
                ("isin".to_string(), isin.to_string()),
                ("mic".to_string(), self.config().mic.to_string()),
                ("minDate".to_string(), min_date.format("%Y-%m-%d").to_string()),
                ("maxDate".to_string(), max_date.format("%Y-%m-%d").to_string()),
            ],
        };

        fetch_paged(self, &query).await
    }

    /// Historical key figures for an equity, e.g. total assets and other
    /// balance-sheet data (available back to roughly 1999).
    pub async fn historical_key_data(&self, isin: &str) -> Result<Vec<Value>> {
        let query = PagedQuery {
            operation: "historical_key_data",
            records_field: "data",
            page_size: self.config().history_page_size,
            params: vec![("isin".to_string(), isin.to_string())],
        };

        fetch_paged(self, &query).await
    }

    /// Dividend payments recorded for an equity.
    pub async fn dividend_information(&self, isin: &str) -> Result<Vec<Value>> {
        let query = PagedQuery {
            operation: "dividend_information",
            records_field: "data",
            page_size: self.config().history_page_size,
            params: vec![("isin".to_string(), isin.to_string())],
        };

        fetch_paged(self, &query).await
    }
}
