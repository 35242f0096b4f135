use crate::core::config::DolarApiProviderConfig;
use crate::core::{QuoteName, RateSource};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Quote service at dolarapi.com, one endpoint per quote.
pub struct DolarApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl DolarApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("efund/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &DolarApiProviderConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Fetches the full quote object for one quote.
    #[instrument(name = "DolarApiFetch", skip(self), fields(quote = %quote))]
    pub async fn fetch_quote(&self, quote: QuoteName) -> Result<DolarQuote> {
        let url = format!("{}/v1/dolares/{}", self.base_url, quote.endpoint_slug());
        debug!("Requesting quote from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request error for {quote} at {url}"))?
            .error_for_status()
            .with_context(|| format!("Unexpected status for {quote} at {url}"))?;

        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for {quote}"))?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty response for {}", quote));
        }

        match serde_json::from_str::<DolarQuote>(&response_text) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse quote response"
                );
                Err(e).with_context(|| format!("Failed to parse quote response for {quote}"))
            }
        }
    }
}

/// Quote object returned by the service. Fields other than `venta` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DolarQuote {
    #[serde(rename = "venta")]
    pub sell: f64,
}

#[async_trait]
impl RateSource for DolarApiProvider {
    async fn fetch_sell_price(&self, quote: QuoteName) -> Result<f64> {
        Ok(self.fetch_quote(quote).await?.sell)
    }
}
