//! Static product catalog
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Embedded seed catalog shipped with the storefront.
const SEED_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Stable identity key of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price in whole currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    /// Free-text label; the set of categories is derived from the catalog.
    pub category: String,
    /// Display glyph shown on the product card.
    pub image: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Ordered, immutable sequence of products with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that every id is positive and unique.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroId`] or [`CatalogError::DuplicateId`] when the
    /// identity invariant does not hold.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.get() == 0 {
                return Err(CatalogError::ZeroId {
                    title: product.title.clone(),
                });
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a `{"products": [...]}` JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the ids are invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Price of a product, or zero when the id is unknown.
    #[must_use]
    pub fn price_of(&self, id: ProductId) -> Price {
        self.find(id).map_or(Price::ZERO, |product| product.price)
    }

    /// Distinct category labels in first-occurrence order.
    #[must_use]
    pub fn category_labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|label| seen.insert(*label))
            .collect()
    }
}

/// Load the catalog embedded in this crate.
///
/// # Errors
///
/// Returns an error if the embedded JSON is malformed or violates the id invariant.
pub fn load_seed_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(SEED_CATALOG_JSON)
}
