//! Currency metadata and the daily rate table shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized (lowercase) code of the base currency all feed rates are
/// expressed against.
pub const BASE_CODE: &str = "usd";

/// Descriptive metadata for one currency, as published by the rate feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    pub code: String,
    pub alpha_code: String,
    pub numeric_code: String,
    pub name: String,
}

impl CurrencyInfo {
    /// The base currency. The feed never carries an entry for it, so its
    /// metadata is fixed here.
    pub fn base() -> Self {
        CurrencyInfo {
            code: "USD".to_string(),
            alpha_code: "USD".to_string(),
            numeric_code: "840".to_string(),
            name: "U.S. Dollar".to_string(),
        }
    }
}

/// One feed entry: currency metadata plus its rate against the base currency
/// and the feed's last-update timestamp for that entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub code: String,
    pub alpha_code: String,
    pub numeric_code: String,
    pub name: String,
    pub rate: f64,
    pub date: String,
}

impl From<&RateEntry> for CurrencyInfo {
    fn from(entry: &RateEntry) -> Self {
        CurrencyInfo {
            code: entry.code.clone(),
            alpha_code: entry.alpha_code.clone(),
            numeric_code: entry.numeric_code.clone(),
            name: entry.name.clone(),
        }
    }
}

/// The full set of feed entries for one fetch, keyed by lowercase code.
pub type RateTable = HashMap<String, RateEntry>;
