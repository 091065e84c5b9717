use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// The feed may send ids as JSON numbers or strings; both are kept as their
/// decimal string form so large numeric ids survive without precision loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A catalog entry, mapped from the feed's record at the client boundary.
///
/// Immutable once fetched; lives for one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit price in rupiah. Never negative.
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Product {
    /// Shown on the product listing when the feed sends no description.
    pub const LISTING_FALLBACK_DESCRIPTION: &'static str = "Product description not yet available";

    /// Shown on the homepage cards when the feed sends no description.
    pub const FEATURED_FALLBACK_DESCRIPTION: &'static str = "Quality product at the best price";

    #[must_use]
    pub fn listing_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(Self::LISTING_FALLBACK_DESCRIPTION)
    }

    #[must_use]
    pub fn featured_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(Self::FEATURED_FALLBACK_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(description: Option<&str>) -> Product {
        Product {
            id: ProductId::new("7"),
            name: "Kopi Susu".to_string(),
            category: "minuman".to_string(),
            price: Decimal::new(15_000, 0),
            description: description.map(str::to_owned),
            image_url: None,
        }
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::new("12345678901234567890").to_string(), "12345678901234567890");
    }

    #[test]
    fn product_id_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::from("42")).expect("serialize");
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn descriptions_prefer_feed_value() {
        let product = make_product(Some("Fresh brew"));
        assert_eq!(product.listing_description(), "Fresh brew");
        assert_eq!(product.featured_description(), "Fresh brew");
    }

    #[test]
    fn listing_and_featured_fall_back_to_different_text() {
        let product = make_product(None);
        assert_eq!(
            product.listing_description(),
            Product::LISTING_FALLBACK_DESCRIPTION
        );
        assert_eq!(
            product.featured_description(),
            Product::FEATURED_FALLBACK_DESCRIPTION
        );
        assert_ne!(
            Product::LISTING_FALLBACK_DESCRIPTION,
            Product::FEATURED_FALLBACK_DESCRIPTION
        );
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product(Some("Fresh brew"));
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, product);
    }
}
