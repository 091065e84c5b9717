use meprice_core::{CatalogFailure, FailureKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure: DNS, connect, TLS, timeout, or a body that could
    /// not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Http { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid product {product_id}: {reason}")]
    Normalization { product_id: String, reason: String },

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl CatalogError {
    /// Converts into the loader's terminal failure, keeping the display
    /// message as the user-facing text.
    #[must_use]
    pub fn into_failure(self) -> CatalogFailure {
        let kind = match &self {
            CatalogError::Network(_) | CatalogError::InvalidUrl { .. } => FailureKind::Network,
            CatalogError::Http { status, .. } => FailureKind::Http { status: *status },
            CatalogError::Deserialize { .. } | CatalogError::Normalization { .. } => {
                FailureKind::Malformed
            }
        };
        CatalogFailure::new(kind, self.to_string())
    }
}
