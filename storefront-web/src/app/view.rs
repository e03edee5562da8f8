use crate::a11y::STATUS_REGION_ID;
use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::catalog::catalog;
use crate::components::category_bar::CategoryBar;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::product_grid::ProductGrid;
use crate::i18n;
use storefront_core::{Product, category_options, visible_products};
use yew::prelude::*;

/// Render the page from the current state. Derived views are recomputed on every call.
pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let catalog = catalog();
    let options = category_options(catalog);
    let visible: Vec<Product> = visible_products(catalog, &state.selection)
        .into_iter()
        .cloned()
        .collect();
    let dir = if i18n::is_rtl() { "rtl" } else { "ltr" };

    html! {
        <div class="storefront" dir={dir} lang={(*state.current_language).clone()}>
            <Header
                cart={(*state.cart).clone()}
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
                on_remove={handlers.remove.clone()} />
            <CategoryBar
                options={options}
                selected={(*state.selection).clone()}
                on_select={handlers.select.clone()} />
            <main id="main" role="main" class="product-section">
                <ProductGrid products={visible} on_add={handlers.add.clone()} />
            </main>
            <Footer />
            <div aria-live="polite" aria-atomic="true" class="sr-only" id={STATUS_REGION_ID}></div>
        </div>
    }
}
