//! Paged response envelope.

use serde_json::Value;

use crate::{Bf4Error, Result};

/// One page of a chunked endpoint response.
///
/// The server caps every history response at a fixed record count and
/// declares the full result size in `totalCount`. The list-valued field
/// carrying the page's records varies per endpoint (`data` for bid/ask and
/// price history, `ticks` for time/sales), so splitting the envelope takes
/// the field name as a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Total record count declared by the server for the whole query.
    pub total_count: u64,
    /// Records carried by this page, in server order, passed through
    /// verbatim.
    pub records: Vec<Value>,
}

impl Page {
    /// Splits a decoded response body into its declared total and records.
    ///
    /// # Errors
    ///
    /// Returns [`Bf4Error::UnexpectedShape`] if `totalCount` is missing or
    /// not a non-negative integer, or if `records_field` is missing or not
    /// an array.
    pub fn from_body(mut body: Value, records_field: &'static str) -> Result<Self> {
        let total_count = body
            .get("totalCount")
            .and_then(Value::as_u64)
            .ok_or(Bf4Error::UnexpectedShape {
                field: "totalCount",
            })?;

        let records = match body.get_mut(records_field).map(Value::take) {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(Bf4Error::UnexpectedShape {
                    field: records_field,
                });
            }
        };

        Ok(Self {
            total_count,
            records,
        })
    }
}
