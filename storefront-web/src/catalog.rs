//! Process-wide catalog shared by every component.
use once_cell::sync::Lazy;
use storefront_core::{Catalog, load_seed_catalog};

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    load_seed_catalog().unwrap_or_else(|e| {
        log::error!("Failed to load product catalog: {e}");
        Catalog::default()
    })
});

/// The seeded product catalog. Loaded on first use and never mutated.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_seeded_once() {
        assert_eq!(catalog().len(), 6);
        assert!(std::ptr::eq(catalog(), catalog()));
    }
}
