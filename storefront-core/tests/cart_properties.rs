use storefront_core::{
    ALL_CATEGORIES_LABEL, Cart, CategorySelection, ProductId, StorefrontSession,
    calculate_cart_total, load_seed_catalog,
};

fn ids(raw: &[u32]) -> Vec<ProductId> {
    raw.iter().copied().map(ProductId::new).collect()
}

#[test]
fn cart_length_tracks_every_add() {
    let catalog = load_seed_catalog().unwrap();
    let mut session = StorefrontSession::new(&catalog);
    let sequence = [1, 1, 4, 6, 2, 99, 3, 1];
    for (calls, id) in sequence.iter().enumerate() {
        session.add_to_cart(ProductId::new(*id));
        assert_eq!(session.cart_count(), calls + 1);
    }
}

#[test]
fn remove_drops_all_k_occurrences() {
    let catalog = load_seed_catalog().unwrap();
    let mut session = StorefrontSession::new(&catalog);
    for id in ids(&[2, 5, 2, 2, 1]) {
        session.add_to_cart(id);
    }
    let target = ProductId::new(2);
    let k = session.cart().count_of(target);
    let before = session.cart_count();

    assert_eq!(session.remove_from_cart(target), k);
    assert_eq!(session.cart().count_of(target), 0);
    assert_eq!(session.cart_count(), before - k);
    assert_eq!(session.cart().entries(), ids(&[5, 1]).as_slice());
}

#[test]
fn totals_match_seed_prices() {
    let catalog = load_seed_catalog().unwrap();
    assert_eq!(calculate_cart_total(&Cart::new(), &catalog), 0);

    let mut session = StorefrontSession::new(&catalog);
    for id in ids(&[1, 2, 3]) {
        session.add_to_cart(id);
    }
    assert_eq!(session.total_price(), 497);
}

#[test]
fn design_category_shows_two_products_in_order() {
    let catalog = load_seed_catalog().unwrap();
    let mut session = StorefrontSession::new(&catalog);
    session.set_category("تصميم");
    let visible = session.visible_products();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|p| p.category == "تصميم"));
    assert_eq!(
        visible.iter().map(|p| p.id).collect::<Vec<_>>(),
        ids(&[3, 6])
    );
}

#[test]
fn all_sentinel_restores_full_catalog() {
    let catalog = load_seed_catalog().unwrap();
    let mut session = StorefrontSession::new(&catalog);
    session.set_category("كتب");
    assert_eq!(session.visible_products().len(), 1);
    session.set_category(ALL_CATEGORIES_LABEL);
    assert_eq!(session.selection(), &CategorySelection::All);
    assert_eq!(session.visible_products().len(), 6);
}

#[test]
fn unknown_category_is_accepted_and_empty() {
    let catalog = load_seed_catalog().unwrap();
    let mut session = StorefrontSession::new(&catalog);
    session.set_category("غير موجود");
    assert_eq!(session.selection().label(), "غير موجود");
    assert!(session.visible_products().is_empty());
}

#[test]
fn filter_does_not_touch_cart() {
    let catalog = load_seed_catalog().unwrap();
    let mut session = StorefrontSession::new(&catalog);
    session.add_to_cart(ProductId::new(1));
    session.set_category("قوالب");
    session.set_category("قوالب");
    assert_eq!(session.cart_count(), 1);
    assert_eq!(session.total_price(), 299);
}
