//! Storefront Core
//!
//! Platform-agnostic catalog, cart and category filter logic for the digital
//! products storefront. This crate has no UI or browser dependencies.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod session;

// Re-export commonly used types
pub use cart::{Cart, CartEntry, calculate_cart_total};
pub use catalog::{Catalog, Price, Product, ProductId, load_seed_catalog};
pub use error::CatalogError;
pub use filter::{ALL_CATEGORIES_LABEL, CategorySelection, category_options, visible_products};
pub use session::{SessionSnapshot, StorefrontSession};
