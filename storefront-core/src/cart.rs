//! Shopping cart
use crate::catalog::{Catalog, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Ordered list of product ids added by the shopper.
///
/// Duplicates are kept as separate entries; there is no quantity tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<ProductId>,
}

/// One cart position resolved against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry<'a> {
    pub position: usize,
    pub id: ProductId,
    /// `None` when the id is not in the catalog.
    pub product: Option<&'a Product>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` to the cart. Unknown ids are accepted.
    pub fn add(&mut self, id: ProductId) {
        self.entries.push(id);
    }

    /// Remove every entry equal to `id`.
    /// Returns how many entries were removed (0 when absent).
    pub fn remove_all(&mut self, id: ProductId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| *entry != id);
        before - self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[ProductId] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries equal to `id`.
    #[must_use]
    pub fn count_of(&self, id: ProductId) -> usize {
        self.entries.iter().filter(|entry| **entry == id).count()
    }

    /// Resolve every cart position against `catalog`, in insertion order.
    pub fn lines<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = CartEntry<'a>> + 'a {
        self.entries
            .iter()
            .enumerate()
            .map(move |(position, id)| CartEntry {
                position,
                id: *id,
                product: catalog.find(*id),
            })
    }
}

impl FromIterator<ProductId> for Cart {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Total price of the cart. Ids missing from the catalog contribute zero.
#[must_use]
pub fn calculate_cart_total(cart: &Cart, catalog: &Catalog) -> u64 {
    cart.entries
        .iter()
        .map(|id| u64::from(catalog.price_of(*id).amount()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_seed_catalog;

    fn id(raw: u32) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn add_keeps_duplicates_in_order() {
        let mut cart = Cart::new();
        cart.add(id(2));
        cart.add(id(1));
        cart.add(id(2));
        assert_eq!(cart.entries(), &[id(2), id(1), id(2)]);
        assert_eq!(cart.count_of(id(2)), 2);
    }

    #[test]
    fn remove_all_drops_every_occurrence() {
        let mut cart: Cart = [1, 3, 1, 2, 1].into_iter().map(ProductId::new).collect();
        assert_eq!(cart.remove_all(id(1)), 3);
        assert_eq!(cart.entries(), &[id(3), id(2)]);
    }

    #[test]
    fn remove_all_absent_is_noop() {
        let mut cart: Cart = [4, 5].into_iter().map(ProductId::new).collect();
        assert_eq!(cart.remove_all(id(9)), 0);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn total_skips_unknown_ids() {
        let catalog = load_seed_catalog().unwrap();
        let cart: Cart = [1, 99, 3].into_iter().map(ProductId::new).collect();
        assert_eq!(calculate_cart_total(&cart, &catalog), 299 + 49);
        assert_eq!(calculate_cart_total(&Cart::new(), &catalog), 0);
    }

    #[test]
    fn lines_resolve_products_and_keep_positions() {
        let catalog = load_seed_catalog().unwrap();
        let cart: Cart = [6, 42].into_iter().map(ProductId::new).collect();
        let lines: Vec<_> = cart.lines(&catalog).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].position, 0);
        assert_eq!(lines[0].product.map(|p| p.price.amount()), Some(129));
        assert_eq!(lines[1].id, id(42));
        assert!(lines[1].product.is_none());
    }
}
