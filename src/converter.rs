//! Core conversion pipeline: validate, fetch, resolve, compute.

use serde::Serialize;
use tracing::debug;

use crate::currency::{BASE_CODE, CurrencyInfo, RateTable};
use crate::error::ConvertError;
use crate::providers::FloatRatesProvider;
use crate::rate_provider::RateTableProvider;

/// Outcome of one conversion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub from: CurrencyInfo,
    pub to: CurrencyInfo,
    pub amount: f64,
    pub result: f64,
    pub rate: f64,
    pub inverse_rate: f64,
    pub date: String,
}

/// Caller inputs after validation: trimmed, lowercased codes and a resolved
/// amount.
#[derive(Debug, Clone, PartialEq)]
struct NormalizedInputs {
    from: String,
    to: String,
    amount: f64,
}

fn validate(from: &str, to: &str, amount: Option<f64>) -> Result<NormalizedInputs, ConvertError> {
    let from = from.trim().to_lowercase();
    if from.is_empty() {
        return Err(ConvertError::InvalidArgument(
            "\"from\" currency code cannot be an empty string".to_string(),
        ));
    }

    let to = to.trim().to_lowercase();
    if to.is_empty() {
        return Err(ConvertError::InvalidArgument(
            "\"to\" currency code cannot be an empty string".to_string(),
        ));
    }

    let amount = match amount {
        None => 1.0,
        Some(a) if a.is_nan() => {
            return Err(ConvertError::InvalidArgument(
                "\"amount\" must be a number".to_string(),
            ));
        }
        Some(a) if a <= 0.0 => {
            return Err(ConvertError::InvalidArgument(
                "\"amount\" must be a positive number".to_string(),
            ));
        }
        Some(a) => a,
    };

    Ok(NormalizedInputs { from, to, amount })
}

fn resolve(inputs: &NormalizedInputs, table: &RateTable) -> Result<ConversionResult, ConvertError> {
    let from_entry = if inputs.from == BASE_CODE {
        None
    } else {
        Some(
            table
                .get(&inputs.from)
                .ok_or_else(|| ConvertError::UnknownCurrency {
                    code: inputs.from.clone(),
                    param: "from",
                })?,
        )
    };

    let to_entry = if inputs.to == BASE_CODE {
        None
    } else {
        Some(
            table
                .get(&inputs.to)
                .ok_or_else(|| ConvertError::UnknownCurrency {
                    code: inputs.to.clone(),
                    param: "to",
                })?,
        )
    };

    let from_rate = from_entry.map_or(1.0, |e| e.rate);
    let to_rate = to_entry.map_or(1.0, |e| e.rate);

    let rate = to_rate / from_rate;
    let inverse_rate = 1.0 / rate;
    let result = rate * inputs.amount;

    // The "from" entry's date wins whenever "from" is a non-base currency;
    // only a base-currency "from" falls back to the "to" entry's date.
    let date = if inputs.from == inputs.to {
        "N/A".to_string()
    } else {
        match (from_entry, to_entry) {
            (Some(f), _) => f.date.clone(),
            (None, Some(t)) => t.date.clone(),
            // Both sides base means from == to, handled above.
            (None, None) => "N/A".to_string(),
        }
    };

    Ok(ConversionResult {
        from: from_entry.map_or_else(CurrencyInfo::base, CurrencyInfo::from),
        to: to_entry.map_or_else(CurrencyInfo::base, CurrencyInfo::from),
        amount: inputs.amount,
        result,
        rate,
        inverse_rate,
        date,
    })
}

/// Converts currency values using a rate table fetched per call.
pub struct Converter<P> {
    provider: P,
}

impl Converter<FloatRatesProvider> {
    /// Converter over the live floatrates.com daily feed.
    pub fn new() -> Self {
        Converter {
            provider: FloatRatesProvider::default(),
        }
    }
}

impl Default for Converter<FloatRatesProvider> {
    fn default() -> Self {
        Converter::new()
    }
}

impl<P: RateTableProvider> Converter<P> {
    pub fn with_provider(provider: P) -> Self {
        Converter { provider }
    }

    /// Convert `amount` (default 1) of `from` currency into `to` currency at
    /// today's rate. Codes are ISO 4217, any case, surrounding whitespace
    /// ignored. One feed fetch per call, no caching.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: Option<f64>,
    ) -> Result<ConversionResult, ConvertError> {
        let inputs = validate(from, to, amount)?;
        debug!(from = %inputs.from, to = %inputs.to, amount = inputs.amount, "Converting");

        let table = self.provider.fetch_table().await?;
        resolve(&inputs, &table)
    }
}
