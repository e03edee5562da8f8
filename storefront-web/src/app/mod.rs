use yew::prelude::*;

pub mod handlers;
pub mod state;
pub mod view;

pub use state::AppState;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let handlers = handlers::AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}

#[cfg(test)]
mod tests {
    use super::App;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_full_catalog_with_empty_cart() {
        crate::i18n::set_lang("ar");
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("متجر المنتجات الرقمية"));
        assert!(html.contains("السلة (0)"));
        assert_eq!(html.matches("data-testid=\"product-card\"").count(), 6);
        assert!(!html.contains("data-testid=\"cart-panel\""));
    }
}
