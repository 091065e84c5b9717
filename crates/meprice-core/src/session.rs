//! Per-visitor storefront state.
//!
//! A [`Session`] bundles everything one shopper's front-end needs: the
//! catalog loader, the current view filter, the cart and the checkout flow.
//! It is owned by whoever drives the front-end and passed around by
//! reference; there is no process-wide instance.

use crate::cart::Cart;
use crate::catalog::CatalogLoader;
use crate::checkout::{CheckoutState, PurchaseReceipt};
use crate::error::CheckoutError;
use crate::products::{Product, ProductId};
use crate::view::{self, ViewFilter};

#[derive(Debug, Default)]
pub struct Session {
    pub catalog: CatalogLoader,
    pub filter: ViewFilter,
    pub cart: Cart,
    pub checkout: CheckoutState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog filtered and sorted by the current [`ViewFilter`].
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        view::derive(self.catalog.products(), &self.filter)
    }

    /// Homepage grouping over the full catalog.
    #[must_use]
    pub fn featured_products(&self) -> Vec<Product> {
        view::featured(self.catalog.products())
    }

    /// Homepage grouping narrowed by the current search text and category.
    /// The sort key is ignored; grouped order is kept.
    #[must_use]
    pub fn featured_matches(&self) -> Vec<Product> {
        view::matching(&self.featured_products(), &self.filter)
    }

    /// Category chips for the homepage, taken from the grouped list.
    #[must_use]
    pub fn featured_categories(&self) -> Vec<String> {
        view::categories(&self.featured_products())
    }

    /// Filter choices: `"all"` plus each category in the loaded catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        view::categories(self.catalog.products())
    }

    #[must_use]
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.products().iter().find(|p| &p.id == id)
    }

    /// Adds one unit of the catalog product with `id` to the cart. Returns
    /// `false` when the catalog is not ready or has no such product.
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        let Some(product) = self.find_product(id).cloned() else {
            tracing::debug!(product_id = %id, "add_to_cart: product not in catalog");
            return false;
        };
        self.cart.add_item(&product);
        true
    }

    /// Runs the checkout transition on this session's cart.
    ///
    /// # Errors
    ///
    /// See [`CheckoutState::checkout`].
    pub fn checkout(&mut self) -> Result<&PurchaseReceipt, CheckoutError> {
        self.checkout.checkout(&mut self.cart)
    }

    pub fn dismiss_receipt(&mut self) -> Option<PurchaseReceipt> {
        self.checkout.dismiss_receipt()
    }
}
