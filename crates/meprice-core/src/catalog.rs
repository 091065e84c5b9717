//! Catalog loader state machine.
//!
//! The fetch itself lives in `meprice-catalog`; this module only tracks
//! whether the product list is loading, ready or failed, and makes sure a
//! fetch completing after its owner went away cannot touch state.
//!
//! ```text
//!   Loading --complete(Ok)--> Ready
//!      \----complete(Err)--> Failed
//! ```
//!
//! One load per mount: [`CatalogLoader::start`] hands out a single
//! [`LoadTicket`]; there is no retry.

use serde::Serialize;

use crate::products::Product;

/// What went wrong while loading the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport-level failure: DNS, connect, TLS, timeout.
    Network,
    /// The feed answered with a non-2xx status.
    Http { status: u16 },
    /// The feed answered 2xx but the body could not be used.
    Malformed,
}

/// Terminal load failure with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl CatalogFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CatalogFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Ready(Vec<Product>),
    Failed(CatalogFailure),
}

impl CatalogState {
    /// Products when ready, otherwise an empty slice.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready(products) => products,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&CatalogFailure> {
        match self {
            CatalogState::Failed(failure) => Some(failure),
            CatalogState::Loading | CatalogState::Ready(_) => None,
        }
    }
}

/// Proof that a load was started for a particular mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    mount: u64,
}

#[derive(Debug)]
pub struct CatalogLoader {
    state: CatalogState,
    mount: u64,
    started: bool,
    torn_down: bool,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CatalogState::Loading,
            mount: 0,
            started: false,
            torn_down: false,
        }
    }

    /// Begins the single load for this mount. Returns `None` when a load was
    /// already started or the loader has been torn down.
    pub fn start(&mut self) -> Option<LoadTicket> {
        if self.started || self.torn_down {
            return None;
        }
        self.started = true;
        Some(LoadTicket { mount: self.mount })
    }

    /// Applies a finished load. Returns `false` when the completion was
    /// ignored: stale ticket, torn-down loader, or already completed.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Product>, CatalogFailure>,
    ) -> bool {
        if self.torn_down || ticket.mount != self.mount || !self.state.is_loading() {
            tracing::debug!(
                ticket_mount = ticket.mount,
                current_mount = self.mount,
                torn_down = self.torn_down,
                "ignoring late catalog completion"
            );
            return false;
        }

        self.state = match outcome {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog ready");
                CatalogState::Ready(products)
            }
            Err(failure) => {
                tracing::warn!(kind = ?failure.kind, message = %failure.message, "catalog load failed");
                CatalogState::Failed(failure)
            }
        };
        true
    }

    /// Marks the owner as gone; any in-flight completion is dropped.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.mount = self.mount.wrapping_add(1);
    }

    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.state.products()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::products::ProductId;

    fn products() -> Vec<Product> {
        vec![Product {
            id: ProductId::new("1"),
            name: "Es Teh".to_string(),
            category: "minuman".to_string(),
            price: Decimal::new(5_000, 0),
            description: None,
            image_url: None,
        }]
    }

    #[test]
    fn new_loader_is_loading_with_no_products() {
        let loader = CatalogLoader::new();
        assert!(loader.state().is_loading());
        assert!(loader.products().is_empty());
    }

    #[test]
    fn start_hands_out_one_ticket_per_mount() {
        let mut loader = CatalogLoader::new();
        assert!(loader.start().is_some());
        assert!(loader.start().is_none(), "second start must not issue a ticket");
    }

    #[test]
    fn complete_ok_transitions_to_ready() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.start().unwrap();
        assert!(loader.complete(ticket, Ok(products())));
        assert_eq!(loader.state(), &CatalogState::Ready(products()));
        assert_eq!(loader.products().len(), 1);
    }

    #[test]
    fn complete_ok_with_empty_list_is_ready_not_failed() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.start().unwrap();
        loader.complete(ticket, Ok(Vec::new()));
        assert_eq!(loader.state(), &CatalogState::Ready(Vec::new()));
    }

    #[test]
    fn complete_err_transitions_to_failed() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.start().unwrap();
        let failure = CatalogFailure::new(FailureKind::Http { status: 500 }, "HTTP error! status: 500");
        assert!(loader.complete(ticket, Err(failure.clone())));
        assert_eq!(loader.state().failure(), Some(&failure));
        assert!(loader.products().is_empty());
    }

    #[test]
    fn completion_after_teardown_is_ignored() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.start().unwrap();
        loader.teardown();
        assert!(!loader.complete(ticket, Ok(products())));
        assert!(loader.state().is_loading());
    }

    #[test]
    fn second_completion_is_ignored() {
        let mut loader = CatalogLoader::new();
        let ticket = loader.start().unwrap();
        loader.complete(ticket, Ok(products()));
        let failure = CatalogFailure::new(FailureKind::Network, "offline");
        assert!(!loader.complete(ticket, Err(failure)));
        assert_eq!(loader.products().len(), 1);
    }

    #[test]
    fn start_after_teardown_returns_none() {
        let mut loader = CatalogLoader::new();
        loader.teardown();
        assert!(loader.start().is_none());
    }

    #[test]
    fn failure_serializes_with_kind_tag() {
        let failure = CatalogFailure::new(FailureKind::Http { status: 404 }, "HTTP error! status: 404");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["kind"]["kind"], "http");
        assert_eq!(json["kind"]["status"], 404);
        assert_eq!(failure.to_string(), "HTTP error! status: 404");
    }
}
