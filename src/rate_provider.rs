//! Provides the daily rate table for conversion.

use anyhow::Result;
use async_trait::async_trait;

use crate::currency::RateTable;

#[async_trait]
pub trait RateTableProvider: Send + Sync {
    async fn fetch_table(&self) -> Result<RateTable>;
}
