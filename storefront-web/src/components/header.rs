use crate::components::cart_panel::CartPanel;
use crate::i18n::{self, locales, t, tr, vars};
use storefront_core::{Cart, ProductId};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart: Cart,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub on_remove: Callback<ProductId>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                i18n::set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };

    let count = p.cart.len().to_string();
    let count_vars = vars(&[("count", count.as_str())]);

    html! {
        <header role="banner" class="store-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-brand">
                    <h1 class="store-title">{ t("store.title") }</h1>
                    <p class="store-tagline">{ t("store.tagline") }</p>
                </div>
                <div class="header-actions">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                    <div class="cart-anchor">
                        <button id="cart-button" type="button" class="cart-button"
                            aria-label={tr("cart.summary", Some(&count_vars))}>
                            <span aria-hidden="true">{ "🛒" }</span>
                            <span>{ tr("cart.button", Some(&count_vars)) }</span>
                        </button>
                        if !p.cart.is_empty() {
                            <CartPanel cart={p.cart.clone()} on_remove={p.on_remove.clone()} />
                        }
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(cart: Cart) -> Props {
        Props {
            cart,
            current_lang: "ar".to_string(),
            on_lang_change: Callback::noop(),
            on_remove: Callback::noop(),
        }
    }

    #[test]
    fn empty_cart_hides_panel() {
        i18n::set_lang("ar");
        let html = block_on(LocalServerRenderer::<Header>::with_props(props(Cart::new())).render());
        assert!(html.contains("السلة (0)"));
        assert!(html.contains("lang-select"));
        assert!(!html.contains("data-testid=\"cart-panel\""));
    }

    #[test]
    fn non_empty_cart_shows_count_and_panel() {
        i18n::set_lang("ar");
        let cart: Cart = [1, 1].into_iter().map(ProductId::new).collect();
        let html = block_on(LocalServerRenderer::<Header>::with_props(props(cart)).render());
        assert!(html.contains("السلة (2)"));
        assert!(html.contains("data-testid=\"cart-panel\""));
    }
}
