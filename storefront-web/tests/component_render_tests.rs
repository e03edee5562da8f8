use futures::executor::block_on;
use storefront_core::{Cart, CategorySelection, ProductId, visible_products};
use storefront_web::catalog::catalog;
use storefront_web::components::cart_panel::CartPanel;
use storefront_web::components::footer::Footer;
use storefront_web::components::header::Header;
use storefront_web::components::product_card::ProductCard;
use storefront_web::components::product_grid::ProductGrid;
use yew::{Callback, LocalServerRenderer};

fn cart_of(ids: &[u32]) -> Cart {
    ids.iter().copied().map(ProductId::new).collect()
}

#[test]
fn header_shows_cart_count_and_language_picker() {
    storefront_web::i18n::set_lang("ar");
    let props = storefront_web::components::header::Props {
        cart: cart_of(&[1, 2, 3]),
        current_lang: "ar".to_string(),
        on_lang_change: Callback::noop(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("السلة (3)"));
    assert!(html.contains("lang-select"));
    assert!(html.contains("English"));
    assert!(html.contains("497 ر.س"));
}

#[test]
fn cart_panel_in_english_uses_english_chrome() {
    storefront_web::i18n::set_lang("en");
    let props = storefront_web::components::cart_panel::Props {
        cart: cart_of(&[4]),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CartPanel>::with_props(props).render());
    assert!(html.contains("Items in your cart:"));
    assert!(html.contains("79 SAR"));
    assert!(html.contains("Checkout"));
    storefront_web::i18n::set_lang("ar");
}

#[test]
fn product_card_renders_catalog_fields() {
    storefront_web::i18n::set_lang("ar");
    let product = catalog()
        .find(ProductId::new(6))
        .cloned()
        .expect("seed product 6");
    let props = storefront_web::components::product_card::Props {
        product,
        on_add: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductCard>::with_props(props).render());
    assert!(html.contains("مجموعة خطوط عربية"));
    assert!(html.contains("129 ر.س"));
    assert!(html.contains("تصميم"));
    assert!(html.contains("أضف للسلة"));
}

#[test]
fn product_grid_follows_selection() {
    storefront_web::i18n::set_lang("ar");
    let design = CategorySelection::parse("تصميم");
    let products = visible_products(catalog(), &design)
        .into_iter()
        .cloned()
        .collect();
    let props = storefront_web::components::product_grid::Props {
        products,
        on_add: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProductGrid>::with_props(props).render());
    assert_eq!(html.matches("data-testid=\"product-card\"").count(), 2);
    let first = html.find("data-product-id=\"3\"").expect("product 3 rendered");
    let second = html.find("data-product-id=\"6\"").expect("product 6 rendered");
    assert!(first < second);
}

#[test]
fn footer_renders_contact_and_copyright() {
    storefront_web::i18n::set_lang("ar");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("info@digitalstore.com"));
    assert!(html.contains("جميع الحقوق محفوظة"));
}
