//! Error taxonomy for conversion calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed caller input. Raised before any network access.
    #[error("{0}")]
    InvalidArgument(String),

    /// A normalized currency code that is neither the base currency nor
    /// present in the fetched rate table.
    #[error("\"{code}\" is not a valid currency code in \"{param}\" parameter")]
    UnknownCurrency { code: String, param: &'static str },

    /// Failure from the underlying fetch, passed through unmodified.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
