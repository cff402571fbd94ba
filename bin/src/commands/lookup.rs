//! Single-request lookup commands (master data, key data, index membership).

use anyhow::{Context, Result};
use bf4_lib::prelude::*;

use crate::display::{Format, print_records, print_value};

/// Show master data for an equity.
pub(crate) async fn details(client: &ApiClient, isin: &str, format: Format) -> Result<()> {
    let data = client
        .equity_details(isin)
        .await
        .with_context(|| format!("Failed to fetch master data for {isin}"))?;
    print_value(&data, format)
}

/// Show key/technical figures for an equity.
pub(crate) async fn key_data(client: &ApiClient, isin: &str, format: Format) -> Result<()> {
    let data = client
        .key_data(isin)
        .await
        .with_context(|| format!("Failed to fetch key data for {isin}"))?;
    print_value(&data, format)
}

/// List the indices an equity is a member of.
pub(crate) async fn indices(client: &ApiClient, isin: &str, format: Format) -> Result<()> {
    let indices = client
        .related_indices(isin)
        .await
        .with_context(|| format!("Failed to fetch related indices for {isin}"))?;
    print_records(&indices, format)
}
