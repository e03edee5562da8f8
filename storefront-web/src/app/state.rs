use storefront_core::{Cart, CategorySelection};
use yew::prelude::*;

/// Handles to the page state.
///
/// `cart` and `selection` are the only storefront state; `current_language`
/// only drives re-rendering after a locale switch.
#[derive(Clone)]
pub struct AppState {
    pub cart: UseStateHandle<Cart>,
    pub selection: UseStateHandle<CategorySelection>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        cart: use_state(Cart::new),
        selection: use_state(CategorySelection::default),
        current_language: use_state(crate::i18n::current_lang),
    }
}
