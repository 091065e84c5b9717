//! HTTP client for the MePrice product feed.
//!
//! One GET per call: no retry, no caching, no pagination. The same client
//! backs both the catalog loader ([`CatalogClient::fetch_products`]) and the
//! reverse proxy ([`CatalogClient::fetch_raw`]), so the feed can be read
//! from the upstream URL directly or through the proxy's `/api/barang`.

use std::time::Duration;

use meprice_core::Product;
use reqwest::{Client, Url};

use crate::error::CatalogError;
use crate::normalize::normalize_envelope;
use crate::types::BarangEnvelope;

/// Raw upstream answer, passed through untouched by the proxy.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a client with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the feed at `url` and maps it to products.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidUrl`] if `url` is not an absolute http(s) URL.
    /// - [`CatalogError::Network`] on transport failure.
    /// - [`CatalogError::Http`] on any non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is not the expected JSON envelope.
    /// - [`CatalogError::Normalization`] if a record cannot be mapped.
    pub async fn fetch_products(&self, url: &str) -> Result<Vec<Product>, CatalogError> {
        let upstream = self.fetch_raw(url).await?;

        if !(200..300).contains(&upstream.status) {
            return Err(CatalogError::Http {
                status: upstream.status,
                url: url.to_owned(),
            });
        }

        let envelope = serde_json::from_slice::<BarangEnvelope>(&upstream.body).map_err(|e| {
            CatalogError::Deserialize {
                context: format!("catalog feed from {url}"),
                source: e,
            }
        })?;

        let products = normalize_envelope(envelope)?;
        tracing::debug!(url, count = products.len(), "catalog feed parsed");
        Ok(products)
    }

    /// Performs the GET and returns status, content type and body as-is.
    /// Non-2xx statuses are not errors here.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidUrl`] if `url` is not an absolute http(s) URL.
    /// - [`CatalogError::Network`] on transport failure.
    pub async fn fetch_raw(&self, url: &str) -> Result<UpstreamResponse, CatalogError> {
        let parsed = Self::parse_url(url)?;

        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .inspect_err(|e| tracing::warn!(url, error = %e, "catalog request failed"))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?.to_vec();

        if !(200..300).contains(&status) {
            tracing::warn!(url, status, "catalog feed returned non-success status");
        }

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }

    fn parse_url(url: &str) -> Result<Url, CatalogError> {
        let parsed = Url::parse(url).map_err(|e| CatalogError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(CatalogError::InvalidUrl {
                url: url.to_owned(),
                reason: format!("unsupported scheme \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
