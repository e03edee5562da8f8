//! Storefront session: the cart and category selection over a shared catalog.
use crate::cart::{Cart, calculate_cart_total};
use crate::catalog::{Catalog, Product, ProductId};
use crate::filter::{CategorySelection, category_options, visible_products};
use serde::{Deserialize, Serialize};

/// Owns the two mutable state cells of a storefront page.
///
/// Every operation is total; none of them can fail.
#[derive(Debug, Clone)]
pub struct StorefrontSession<'a> {
    catalog: &'a Catalog,
    cart: Cart,
    selection: CategorySelection,
}

/// Serializable view of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cart: Cart,
    pub selection: CategorySelection,
    pub visible: Vec<ProductId>,
    pub cart_count: usize,
    pub total: u64,
}

impl<'a> StorefrontSession<'a> {
    /// Start a session with an empty cart and the "all" selection.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            selection: CategorySelection::All,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn add_to_cart(&mut self, id: ProductId) {
        self.cart.add(id);
    }

    /// Remove every occurrence of `id`; returns how many were removed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> usize {
        self.cart.remove_all(id)
    }

    #[must_use]
    pub fn total_price(&self) -> u64 {
        calculate_cart_total(&self.cart, self.catalog)
    }

    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// Overwrite the selection. Labels unknown to the catalog are kept as-is.
    pub fn set_category(&mut self, label: &str) {
        self.selection = CategorySelection::parse(label);
    }

    #[must_use]
    pub fn categories(&self) -> Vec<CategorySelection> {
        category_options(self.catalog)
    }

    #[must_use]
    pub fn visible_products(&self) -> Vec<&'a Product> {
        visible_products(self.catalog, &self.selection)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cart: self.cart.clone(),
            selection: self.selection.clone(),
            visible: self.visible_products().iter().map(|p| p.id).collect(),
            cart_count: self.cart_count(),
            total: self.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_seed_catalog;

    #[test]
    fn new_session_starts_empty_on_all() {
        let catalog = load_seed_catalog().unwrap();
        let session = StorefrontSession::new(&catalog);
        assert!(session.cart().is_empty());
        assert!(session.selection().is_all());
        assert_eq!(session.visible_products().len(), 6);
        assert_eq!(session.total_price(), 0);
    }

    #[test]
    fn snapshot_reflects_state() {
        let catalog = load_seed_catalog().unwrap();
        let mut session = StorefrontSession::new(&catalog);
        session.add_to_cart(ProductId::new(3));
        session.add_to_cart(ProductId::new(3));
        session.set_category("تصميم");

        let snap = session.snapshot();
        assert_eq!(snap.cart_count, 2);
        assert_eq!(snap.total, 98);
        assert_eq!(snap.visible, vec![ProductId::new(3), ProductId::new(6)]);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["selection"], "تصميم");
        assert_eq!(json["cart"], serde_json::json!([3, 3]));
    }
}
