use crate::a11y::set_status;
use crate::app::state::AppState;
use crate::catalog::catalog;
use crate::i18n::{tr, vars};
use storefront_core::{Cart, CategorySelection, ProductId};
use yew::prelude::*;

/// Event callbacks wired into the page components.
#[derive(Clone)]
pub struct AppHandlers {
    pub add: Callback<ProductId>,
    pub remove: Callback<ProductId>,
    pub select: Callback<CategorySelection>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    pub fn new(state: &AppState) -> Self {
        Self {
            add: add_handler(state.cart.clone()),
            remove: remove_handler(state.cart.clone()),
            select: select_handler(state.selection.clone()),
            lang_change: lang_handler(state.current_language.clone()),
        }
    }
}

fn add_handler(cart: UseStateHandle<Cart>) -> Callback<ProductId> {
    Callback::from(move |id: ProductId| {
        let next = cart_with_added(&cart, id);
        log::debug!("Added product {id} to cart ({} entries)", next.len());
        announce("cart.added", id);
        cart.set(next);
    })
}

fn remove_handler(cart: UseStateHandle<Cart>) -> Callback<ProductId> {
    Callback::from(move |id: ProductId| {
        let (next, removed) = cart_without(&cart, id);
        log::debug!("Removed {removed} entries of product {id} from cart");
        if removed > 0 {
            announce("cart.removed", id);
        }
        cart.set(next);
    })
}

fn select_handler(selection: UseStateHandle<CategorySelection>) -> Callback<CategorySelection> {
    Callback::from(move |next: CategorySelection| {
        log::debug!("Category filter set to '{next}'");
        selection.set(next);
    })
}

fn lang_handler(current_language: UseStateHandle<String>) -> Callback<String> {
    Callback::from(move |lang: String| {
        log::info!("Switched language to {lang}");
        current_language.set(lang);
    })
}

fn announce(key: &str, id: ProductId) {
    let item = announced_item(id);
    set_status(&tr(key, Some(&vars(&[("item", item.as_str())]))));
}

/// Name spoken for `id`; ids missing from the catalog fall back to `#id`.
pub(crate) fn announced_item(id: ProductId) -> String {
    catalog()
        .find(id)
        .map_or_else(|| format!("#{id}"), |product| product.title.clone())
}

pub(crate) fn cart_with_added(cart: &Cart, id: ProductId) -> Cart {
    let mut next = cart.clone();
    next.add(id);
    next
}

pub(crate) fn cart_without(cart: &Cart, id: ProductId) -> (Cart, usize) {
    let mut next = cart.clone();
    let removed = next.remove_all(id);
    (next, removed)
}
