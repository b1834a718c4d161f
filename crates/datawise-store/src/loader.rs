//! JSON dataset decoding and column coercion.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use datawise_core::SalesRecord;

use crate::error::StoreError;

/// A record as it appears in the source file, before coercion.
#[derive(Debug, Deserialize)]
struct RawRecord {
    product: String,
    city: String,
    region: String,
    rep: String,
    sales: RawSales,
    date: String,
}

/// `sales` may be stored either as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSales {
    Number(f64),
    Text(String),
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Decode a JSON array of record objects into validated rows.
///
/// Fails on the first record whose `sales` or `date` cannot be coerced.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<SalesRecord>, StoreError> {
    let raw: Vec<RawRecord> =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Malformed(e.to_string()))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| coerce(index, record))
        .collect()
}

fn coerce(index: usize, raw: RawRecord) -> Result<SalesRecord, StoreError> {
    let sales = match &raw.sales {
        RawSales::Number(n) => Some(*n),
        RawSales::Text(s) => s.trim().parse::<f64>().ok(),
    }
    .filter(|n| n.is_finite() && *n >= 0.0)
    .ok_or_else(|| StoreError::InvalidSales {
        index,
        value: match &raw.sales {
            RawSales::Number(n) => n.to_string(),
            RawSales::Text(s) => s.clone(),
        },
    })?;

    let date = parse_date(&raw.date).ok_or_else(|| StoreError::InvalidDate {
        index,
        value: raw.date.clone(),
    })?;

    Ok(SalesRecord {
        product: raw.product,
        city: raw.city,
        region: raw.region,
        rep: raw.rep,
        sales,
        date,
    })
}

/// Parse an ISO-8601 date or datetime (extended or basic form), keeping the calendar date component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}
