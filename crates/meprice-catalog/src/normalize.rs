//! Boundary mapping from raw feed records to [`meprice_core::Product`].

use std::str::FromStr;

use meprice_core::{Product, ProductId};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::CatalogError;
use crate::types::{BarangEnvelope, BarangRecord};

/// Unwraps the envelope and normalizes every record.
///
/// A missing or `null` `data` field yields an empty list. One bad record
/// fails the whole batch: the catalog is either fully loaded or not at all.
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] for the first record that cannot
/// be mapped.
pub fn normalize_envelope(envelope: BarangEnvelope) -> Result<Vec<Product>, CatalogError> {
    envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(normalize_product)
        .collect()
}

/// Maps one raw record to a [`Product`].
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the id is neither a number nor
/// a non-empty string, or the price is not a non-negative number.
pub fn normalize_product(record: BarangRecord) -> Result<Product, CatalogError> {
    let id = normalize_id(&record.id)?;
    let price = parse_price(&id, &record.harga)?;

    Ok(Product {
        id,
        name: record.nama,
        category: record.tipe,
        price,
        description: record.deskripsi.filter(|s| !s.trim().is_empty()),
        image_url: record.gambar.filter(|s| !s.trim().is_empty()),
    })
}

fn normalize_id(raw: &Value) -> Result<ProductId, CatalogError> {
    match raw {
        Value::Number(n) => Ok(ProductId::new(n.to_string())),
        Value::String(s) if !s.trim().is_empty() => Ok(ProductId::new(s.trim())),
        other => Err(CatalogError::Normalization {
            product_id: other.to_string(),
            reason: "id must be a number or a non-empty string".into(),
        }),
    }
}

fn parse_price(id: &ProductId, raw: &Value) -> Result<Decimal, CatalogError> {
    let invalid = |reason: String| CatalogError::Normalization {
        product_id: id.to_string(),
        reason,
    };

    let price = match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from(u)
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64)
                    .ok_or_else(|| invalid(format!("price {n} is out of range")))?
            }
        }
        Value::String(s) => Decimal::from_str(s.trim())
            .map_err(|e| invalid(format!("price \"{s}\" is not a number: {e}")))?,
        other => return Err(invalid(format!("price must be numeric, got {other}"))),
    };

    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid(format!("negative price {price}")));
    }

    Ok(price)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
