//! Pure derivations over a fetched product list.
//!
//! Two independent pipelines live here:
//!
//! - [`derive`]: search, category filter and stable sort, driven by a
//!   [`ViewFilter`]. Backs the full product listing.
//! - [`featured`]: category buckets capped at [`FEATURED_PER_CATEGORY`]
//!   items. Backs the homepage summary.
//!
//! Neither holds state; both take the full list and return a new one.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::products::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Maximum products per category in the featured view.
pub const FEATURED_PER_CATEGORY: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Fetch order.
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    /// Human label used by front-ends.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (Cheapest)",
            SortKey::PriceDesc => "Price (Expensive)",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown sort key '{s}'; expected one of {}", valid.join(", "))
            })
    }
}

/// Current search, category and sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilter {
    pub search_text: String,
    /// [`ALL_CATEGORIES`] means no category filter.
    pub category: String,
    pub sort_key: SortKey,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_key: SortKey::Default,
        }
    }
}

impl ViewFilter {
    fn matches(&self, product: &Product, needle: &str) -> bool {
        let matches_search = needle.is_empty() || product.name.to_lowercase().contains(needle);
        let matches_category =
            self.category == ALL_CATEGORIES || product.category == self.category;
        matches_search && matches_category
    }
}

/// Products whose name contains the search text (case-insensitive) and
/// whose category matches, in input order. `filter.sort_key` is not applied.
#[must_use]
pub fn matching(products: &[Product], filter: &ViewFilter) -> Vec<Product> {
    let needle = filter.search_text.to_lowercase();
    products
        .iter()
        .filter(|p| filter.matches(p, &needle))
        .cloned()
        .collect()
}

/// Filters `products` by `filter`, then sorts the survivors.
///
/// The sort is stable: products with equal keys keep their input order, and
/// [`SortKey::Default`] leaves fetch order untouched.
#[must_use]
pub fn derive(products: &[Product], filter: &ViewFilter) -> Vec<Product> {
    let mut out = matching(products, filter);

    match filter.sort_key {
        SortKey::Default => {}
        SortKey::NameAsc => out.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => out.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    out
}

/// `"all"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out.iter().skip(1).any(|c| c == &product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// Buckets products by category, keeps the first [`FEATURED_PER_CATEGORY`]
/// of each, and flattens the buckets in first-seen category order.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<Product> {
    let mut order: Vec<&str> = Vec::new();
    let mut buckets: HashMap<&str, Vec<&Product>> = HashMap::new();

    for product in products {
        let bucket = buckets.entry(product.category.as_str()).or_insert_with(|| {
            order.push(product.category.as_str());
            Vec::with_capacity(FEATURED_PER_CATEGORY)
        });
        if bucket.len() < FEATURED_PER_CATEGORY {
            bucket.push(product);
        }
    }

    order
        .into_iter()
        .filter_map(|category| buckets.remove(category))
        .flatten()
        .cloned()
        .collect()
}

/// Locale-style name ordering: case-insensitive first, raw string as the
/// tie-break so the order is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
