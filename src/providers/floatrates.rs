use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::currency::RateTable;
use crate::rate_provider::RateTableProvider;

/// Public feed host. Rates are updated daily, once in 12 hours at 12 AM/PM.
pub const FLOATRATES_URL: &str = "https://www.floatrates.com";

// FloatRatesProvider implementation for RateTableProvider
pub struct FloatRatesProvider {
    base_url: String,
}

impl FloatRatesProvider {
    pub fn new(base_url: &str) -> Self {
        FloatRatesProvider {
            base_url: base_url.to_string(),
        }
    }
}

impl Default for FloatRatesProvider {
    fn default() -> Self {
        FloatRatesProvider::new(FLOATRATES_URL)
    }
}

#[async_trait]
impl RateTableProvider for FloatRatesProvider {
    async fn fetch_table(&self) -> Result<RateTable> {
        let url = format!("{}/daily/usd.json", self.base_url);
        debug!("Requesting daily rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("fx-convert/0.1")
            .build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} from rate feed", response.status()));
        }

        let text = response.text().await?;

        let table: RateTable = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rate feed JSON: {}", e))?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(mock_response: &str) -> wiremock::MockServer {
        let mock_server = wiremock::MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/daily/usd.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_table_fetch() {
        let mock_response = r#"{
            "eur": {
                "code": "EUR",
                "alphaCode": "EUR",
                "numericCode": "978",
                "name": "Euro",
                "rate": 0.9,
                "inverseRate": 1.1111111111111,
                "date": "2023-01-01T00:00:00Z"
            },
            "gbp": {
                "code": "GBP",
                "alphaCode": "GBP",
                "numericCode": "826",
                "name": "U.K. Pound Sterling",
                "rate": 0.8,
                "inverseRate": 1.25,
                "date": "2023-01-02T00:00:00Z"
            }
        }"#;

        let mock_server = create_mock_server(mock_response).await;

        let provider = FloatRatesProvider::new(&mock_server.uri());
        let table = provider.fetch_table().await.unwrap();

        assert_eq!(table.len(), 2);
        let eur = table.get("eur").unwrap();
        assert_eq!(eur.code, "EUR");
        assert_eq!(eur.name, "Euro");
        assert_eq!(eur.rate, 0.9);
        assert_eq!(eur.date, "2023-01-01T00:00:00Z");
        assert_eq!(table.get("gbp").unwrap().rate, 0.8);
    }

    #[tokio::test]
    async fn test_feed_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/daily/usd.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = FloatRatesProvider::new(&mock_server.uri());
        let result = provider.fetch_table().await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error from rate feed"
        );
    }

    #[tokio::test]
    async fn test_feed_malformed_response() {
        let mock_server = create_mock_server("not json at all").await;

        let provider = FloatRatesProvider::new(&mock_server.uri());
        let result = provider.fetch_table().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rate feed JSON")
        );
    }

    #[tokio::test]
    async fn test_feed_entry_missing_rate_is_rejected() {
        let mock_response = r#"{
            "eur": {
                "code": "EUR",
                "alphaCode": "EUR",
                "numericCode": "978",
                "name": "Euro",
                "date": "2023-01-01T00:00:00Z"
            }
        }"#;

        let mock_server = create_mock_server(mock_response).await;

        let provider = FloatRatesProvider::new(&mock_server.uri());
        let result = provider.fetch_table().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rate feed JSON")
        );
    }
}
