//! Query timestamp serialization.
//!
//! The remote API takes `from`/`to` bounds as ISO-8601 strings with a
//! literal `Z` suffix. Bid/ask history expects the bound converted to UTC
//! first; time/sales takes the caller's local representation with `Z`
//! appended and no conversion. The asymmetry matches observed server
//! behavior and is kept rather than unified. Sub-second components render
//! as six fractional digits when present and are omitted otherwise.

use chrono::{DateTime, TimeZone, Timelike, Utc};

const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const MICROSECONDS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Formats a timestamp as UTC ISO-8601 with a `Z` suffix.
pub(crate) fn utc_param<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    let utc = t.with_timezone(&Utc);
    let spec = if utc.nanosecond() == 0 {
        SECONDS
    } else {
        MICROSECONDS
    };
    format!("{}Z", utc.format(spec))
}

/// Formats a timestamp's offset-naive local representation with a literal
/// `Z` appended, without converting to UTC.
pub(crate) fn naive_param<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    let local = t.naive_local();
    let spec = if local.nanosecond() == 0 {
        SECONDS
    } else {
        MICROSECONDS
    };
    format!("{}Z", local.format(spec))
}
