//! Plain-text views. Every function returns the full block so output can be
//! asserted on without capturing stdout.

use std::fmt::Write as _;

use meprice_core::{format_line_total, format_rupiah, Cart, Product, PurchaseReceipt, SortKey};

const NAME_WIDTH: usize = 28;

pub(crate) fn product_list(products: &[Product], sort_key: SortKey) -> String {
    if products.is_empty() {
        return "Product not found".to_string();
    }

    let mut out = format!(
        "{:<10}{:<w$}{:<14}PRICE\n",
        "ID",
        "NAME",
        "CATEGORY",
        w = NAME_WIDTH
    );
    for product in products {
        let _ = writeln!(out, "{}", product_row(product));
        let _ = writeln!(out, "{:<10}{}", "", product.listing_description());
    }
    let _ = write!(
        out,
        "{} products available (sorted by {})",
        products.len(),
        sort_key.label()
    );
    out
}

pub(crate) fn featured(categories: &[String], products: &[Product]) -> String {
    let mut out = format!("Categories: {}\n", categories.join(" | "));
    let _ = writeln!(out, "{} products are available to you", products.len());
    if products.is_empty() {
        out.push_str("Product not found");
        return out;
    }

    let mut current: Option<&str> = None;
    for product in products {
        if current != Some(product.category.as_str()) {
            let _ = writeln!(out, "\n[{}]", product.category);
            current = Some(product.category.as_str());
        }
        let _ = writeln!(out, "{}", product_row(product));
        let _ = writeln!(out, "{:<10}{}", "", product.featured_description());
    }
    out.truncate(out.trim_end().len());
    out
}

pub(crate) fn cart(cart: &Cart) -> String {
    let mut out = String::from("Cart:\n");
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "  {} (@{})",
            format_line_total(line),
            format_rupiah(line.product.price)
        );
    }
    let _ = write!(
        out,
        "Total: {} ({} items)",
        format_rupiah(cart.total_price()),
        cart.total_items()
    );
    out
}

pub(crate) fn receipt(receipt: &PurchaseReceipt) -> String {
    let mut out = String::from("Payment successful!\n");
    let _ = writeln!(out, "Items purchased ({} products):", receipt.total_items());
    for line in receipt.lines() {
        let _ = writeln!(out, "  - {}", format_line_total(line));
    }
    let _ = writeln!(out, "Total payment: {}", format_rupiah(receipt.total_price()));
    let _ = write!(
        out,
        "Purchased at: {}",
        receipt.purchased_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    out
}

fn product_row(product: &Product) -> String {
    format!(
        "{:<10}{:<w$}{:<14}{}",
        product.id.as_str(),
        truncate(&product.name, NAME_WIDTH - 2),
        product.category,
        format_rupiah(product.price),
        w = NAME_WIDTH
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
