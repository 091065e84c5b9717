//! Command handlers: each loads into a [`Session`] and prints a view of it.

use meprice_catalog::{CatalogClient, CatalogError};
use meprice_core::{ProductId, Session, SortKey, ViewFilter};

use crate::render;

/// Loads the catalog into a fresh session.
///
/// Ctrl-C while the request is in flight tears the loader down, so a late
/// response is dropped instead of applied.
///
/// # Errors
///
/// Returns an error carrying `Failed to load products: ...` when the feed
/// cannot be loaded, or when interrupted.
pub(crate) async fn load_session(client: &CatalogClient, url: &str) -> anyhow::Result<Session> {
    let mut session = Session::new();
    let Some(ticket) = session.catalog.start() else {
        anyhow::bail!("catalog load was already started for this session");
    };

    tracing::debug!(url, "loading products");
    let outcome = tokio::select! {
        result = client.fetch_products(url) => result.map_err(CatalogError::into_failure),
        _ = tokio::signal::ctrl_c() => {
            session.catalog.teardown();
            anyhow::bail!("interrupted while loading products");
        }
    };
    session.catalog.complete(ticket, outcome);

    if let Some(failure) = session.catalog.state().failure() {
        anyhow::bail!("Failed to load products: {}", failure.message);
    }
    Ok(session)
}

pub(crate) fn run_products(
    session: &mut Session,
    search_text: String,
    category: String,
    sort_key: SortKey,
) {
    session.filter = ViewFilter {
        search_text,
        category,
        sort_key,
    };

    let visible = session.visible_products();
    println!("{}", render::product_list(&visible, session.filter.sort_key));
}

/// Homepage view: the grouped list narrowed by search and category. The
/// sort key stays at its default; grouping order is what is shown.
pub(crate) fn run_featured(session: &mut Session, search_text: String, category: String) {
    session.filter = ViewFilter {
        search_text,
        category,
        sort_key: SortKey::Default,
    };

    println!(
        "{}",
        render::featured(&session.featured_categories(), &session.featured_matches())
    );
}

pub(crate) fn run_categories(session: &Session) {
    for category in session.categories() {
        println!("{category}");
    }
}

/// Adds each id once, shows the cart, then checks out.
///
/// Unknown ids are reported and skipped.
///
/// # Errors
///
/// Returns the checkout validation error when nothing ended up in the cart.
pub(crate) fn run_buy(session: &mut Session, ids: &[String]) -> anyhow::Result<()> {
    for raw in ids {
        let id = ProductId::new(raw.as_str());
        if !session.add_to_cart(&id) {
            eprintln!("warning: product '{id}' not found; skipping");
        }
    }

    if !session.cart.is_empty() {
        println!("{}", render::cart(&session.cart));
        println!();
    }

    let receipt = session.checkout()?;
    println!("{}", render::receipt(receipt));
    session.dismiss_receipt();
    Ok(())
}
