use crate::catalog::catalog;
use crate::i18n::{fmt_missing_price, fmt_price, t, tr, vars};
use storefront_core::{Cart, ProductId, calculate_cart_total};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart: Cart,
    pub on_remove: Callback<ProductId>,
}

/// Dropdown listing every cart entry with its price, the total and a checkout button.
///
/// Entries whose id is not in the catalog render with a blank title and a bare currency suffix.
#[function_component(CartPanel)]
pub fn cart_panel(p: &Props) -> Html {
    let catalog = catalog();
    let total = calculate_cart_total(&p.cart, catalog);

    html! {
        <div class="cart-panel" role="region" aria-labelledby="cart-title" data-testid="cart-panel">
            <h3 id="cart-title" class="cart-title">{ t("cart.title") }</h3>
            <ul class="cart-lines">
                { for p.cart.lines(catalog).map(|line| {
                    let title = line.product.map(|product| product.title.clone()).unwrap_or_default();
                    let price = line
                        .product
                        .map_or_else(fmt_missing_price, |product| {
                            fmt_price(u64::from(product.price.amount()))
                        });
                    let remove_label = tr("cart.remove", Some(&vars(&[("item", title.as_str())])));
                    let on_click = {
                        let cb = p.on_remove.clone();
                        let id = line.id;
                        Callback::from(move |_: MouseEvent| cb.emit(id))
                    };
                    html! {
                        <li key={line.position} class="cart-line" data-testid="cart-line" data-product-id={line.id.to_string()}>
                            <span class="cart-line-title">{ title }</span>
                            <span class="cart-line-actions">
                                <span class="cart-line-price">{ price }</span>
                                <button type="button" class="cart-remove" onclick={on_click} aria-label={remove_label}>{ "×" }</button>
                            </span>
                        </li>
                    }
                }) }
            </ul>
            <div class="cart-footer">
                <div class="cart-total" aria-live="polite">
                    <span>{ t("cart.total") }</span>
                    <span class="cart-total-value" data-testid="cart-total">{ fmt_price(total) }</span>
                </div>
                // Checkout is presentational only; no purchase flow exists.
                <button type="button" class="checkout-button">{ t("cart.checkout") }</button>
            </div>
        </div>
    }
}
