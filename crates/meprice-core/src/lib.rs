pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod price;
pub mod products;
pub mod session;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartLine};
pub use catalog::{CatalogFailure, CatalogLoader, CatalogState, FailureKind, LoadTicket};
pub use checkout::{CheckoutState, PurchaseReceipt};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CheckoutError, ConfigError};
pub use price::{format_line_total, format_rupiah};
pub use products::{Product, ProductId};
pub use session::Session;
pub use view::{categories, derive, featured, matching, SortKey, ViewFilter, ALL_CATEGORIES};
