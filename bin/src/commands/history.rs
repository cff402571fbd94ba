//! Chunked history commands (bid/ask, time/sales, price history, dividends).

use anyhow::{Context, Result};
use bf4_lib::prelude::*;
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::display::{Format, print_records};

/// Fetch best bid/ask history for a time window.
pub(crate) async fn bid_ask(
    client: &ApiClient,
    isin: &str,
    start_str: &str,
    end_str: &str,
    format: Format,
) -> Result<()> {
    let (start, end) = parse_window(start_str, end_str)?;

    let quotes = client
        .bid_ask_history(isin, &start, &end)
        .await
        .with_context(|| format!("Failed to fetch bid/ask history for {isin}"))?;

    eprintln!("Fetched {} bid/ask quotes", quotes.len());
    print_records(&quotes, format)
}

/// Fetch time/sales for a time window.
pub(crate) async fn ticks(
    client: &ApiClient,
    isin: &str,
    start_str: &str,
    end_str: &str,
    format: Format,
) -> Result<()> {
    let (start, end) = parse_window(start_str, end_str)?;

    let trades = client
        .times_sales(isin, &start, &end)
        .await
        .with_context(|| format!("Failed to fetch time/sales for {isin}"))?;

    eprintln!("Fetched {} trades", trades.len());
    print_records(&trades, format)
}

/// Fetch daily price history for a date range.
pub(crate) async fn price_history(
    client: &ApiClient,
    isin: &str,
    start_str: &str,
    end_str: &str,
    format: Format,
) -> Result<()> {
    let min_date = parse_date(start_str)?;
    let max_date = parse_date(end_str)?;

    let rows = client
        .price_history(isin, min_date, max_date)
        .await
        .with_context(|| format!("Failed to fetch price history for {isin}"))?;

    print_records(&rows, format)
}

/// Fetch historical key figures.
pub(crate) async fn historical_key_data(
    client: &ApiClient,
    isin: &str,
    format: Format,
) -> Result<()> {
    let rows = client
        .historical_key_data(isin)
        .await
        .with_context(|| format!("Failed to fetch historical key data for {isin}"))?;

    print_records(&rows, format)
}

/// Fetch recorded dividend payments.
pub(crate) async fn dividends(client: &ApiClient, isin: &str, format: Format) -> Result<()> {
    let rows = client
        .dividend_information(isin)
        .await
        .with_context(|| format!("Failed to fetch dividend information for {isin}"))?;

    print_records(&rows, format)
}

fn parse_window(
    start_str: &str,
    end_str: &str,
) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let start = DateTime::parse_from_rfc3339(start_str)
        .with_context(|| format!("Invalid start timestamp: {start_str}"))?;
    let end = DateTime::parse_from_rfc3339(end_str)
        .with_context(|| format!("Invalid end timestamp: {end_str}"))?;
    Ok((start, end))
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {date_str}"))
}
