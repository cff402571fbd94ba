//! Generic chunked fetch loop for paged endpoints.

use bf4_types::{Bf4Error, Page, Result};
use serde_json::Value;

use crate::ApiClient;

/// Description of one paged query against a `/data` operation.
#[derive(Debug, Clone)]
pub struct PagedQuery {
    /// Remote operation name under `/data`.
    pub operation: &'static str,
    /// Name of the list-valued field carrying each page's records.
    pub records_field: &'static str,
    /// Fixed per-request page size.
    pub page_size: u64,
    /// Query parameters shared by every page request. `limit` and `offset`
    /// are appended by the loop.
    pub params: Vec<(String, String)>,
}

/// Fetches every page of a bounded query and concatenates the records in
/// request order.
///
/// Pages are requested strictly sequentially with offsets `0, page_size,
/// 2 * page_size, ...`. Each response declares the full result size in
/// `totalCount`; the loop stops once the next offset would be at or past
/// that total, so an exact-multiple total fetches no trailing empty page.
/// The provisional maximum starts above zero, which guarantees at least one
/// request and makes an empty result cost exactly one round trip.
///
/// # Errors
///
/// A zero `page_size` is rejected with [`Bf4Error::ZeroPageSize`] before any
/// request is issued, since the offset could never advance. A failure on any
/// page aborts the whole fetch and discards the pages already accumulated; no
/// partial result is returned.
pub async fn fetch_paged(client: &ApiClient, query: &PagedQuery) -> Result<Vec<Value>> {
    if query.page_size == 0 {
        return Err(Bf4Error::ZeroPageSize);
    }

    let mut records = Vec::new();
    let mut page_index: u64 = 0;
    let mut max_count = query.page_size + 1;

    while page_index * query.page_size < max_count {
        let offset = page_index * query.page_size;

        let mut params: Vec<(&str, String)> = query
            .params
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        params.push(("limit", query.page_size.to_string()));
        params.push(("offset", offset.to_string()));

        let body: Value = client.data_request(query.operation, &params).await?;
        let page = Page::from_body(body, query.records_field)?;

        max_count = page.total_count;
        records.extend(page.records);
        page_index += 1;
    }

    Ok(records)
}
