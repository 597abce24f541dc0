pub mod converter;
pub mod currency;
pub mod error;
pub mod providers;
pub mod rate_provider;

pub use converter::{ConversionResult, Converter};
pub use currency::{BASE_CODE, CurrencyInfo, RateEntry, RateTable};
pub use error::ConvertError;
pub use rate_provider::RateTableProvider;

/// Convert `amount` (default 1) of `from` currency into `to` currency using
/// the live floatrates.com daily feed.
pub async fn convert(
    from: &str,
    to: &str,
    amount: Option<f64>,
) -> Result<ConversionResult, ConvertError> {
    Converter::new().convert(from, to, amount).await
}
