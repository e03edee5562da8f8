use crate::i18n::{fmt_price, t};
use storefront_core::{Product, ProductId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub on_add: Callback<ProductId>,
}

#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let product = &p.product;
    let on_add = {
        let cb = p.on_add.clone();
        let id = product.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let heading_id = format!("product-{}", product.id);

    html! {
        <article class="product-card" role="group" aria-labelledby={heading_id.clone()}
            data-testid="product-card" data-product-id={product.id.to_string()}>
            <div class="product-glyph" aria-hidden="true">
                <span>{ product.image.clone() }</span>
            </div>
            <div class="product-body">
                <div class="product-head">
                    <h3 id={heading_id}>{ product.title.clone() }</h3>
                    <span class="product-category">{ product.category.clone() }</span>
                </div>
                <p class="product-description">{ product.description.clone() }</p>
                <div class="product-foot">
                    <span class="product-price">{ fmt_price(u64::from(product.price.amount())) }</span>
                    <button type="button" class="add-button" onclick={on_add}>{ t("product.add") }</button>
                </div>
            </div>
        </article>
    }
}
