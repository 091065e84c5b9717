//! Wire types for the MePrice product feed (`GET /barang/`).
//!
//! ## Observed shape
//!
//! ```json
//! { "data": [ { "id": 1, "nama": "Kopi Susu", "tipe": "minuman",
//!               "harga": 15000, "deskripsi": "...", "gambar": "https://..." } ] }
//! ```
//!
//! Field names are Indonesian: `nama` = name, `tipe` = category,
//! `harga` = price, `deskripsi` = description, `gambar` = image URL. They are
//! mapped to [`meprice_core::Product`] in `normalize.rs` and never leak past
//! this crate.
//!
//! ### `data`
//! May be missing or `null`; both mean an empty catalog, not an error.
//!
//! ### `id`
//! Usually a JSON number, occasionally a string. Kept as a raw
//! [`serde_json::Value`] and rendered to a string during normalization.
//!
//! ### `harga`
//! A JSON number in practice. Numeric strings are accepted too.

use serde::Deserialize;
use serde_json::Value;

/// Top-level response from the product feed.
#[derive(Debug, Deserialize)]
pub struct BarangEnvelope {
    #[serde(default)]
    pub data: Option<Vec<BarangRecord>>,
}

/// A single product record as sent by the feed.
#[derive(Debug, Deserialize)]
pub struct BarangRecord {
    pub id: Value,

    /// Product name.
    pub nama: String,

    /// Category.
    pub tipe: String,

    /// Unit price in rupiah.
    pub harga: Value,

    #[serde(default)]
    pub deskripsi: Option<String>,

    #[serde(default)]
    pub gambar: Option<String>,
}
