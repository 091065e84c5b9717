pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{CatalogClient, UpstreamResponse};
pub use error::CatalogError;
pub use normalize::{normalize_envelope, normalize_product};
pub use types::{BarangEnvelope, BarangRecord};
