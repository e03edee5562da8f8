use crate::components::product_card::ProductCard;
use storefront_core::{Product, ProductId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub products: Vec<Product>,
    pub on_add: Callback<ProductId>,
}

#[function_component(ProductGrid)]
pub fn product_grid(p: &Props) -> Html {
    html! {
        <div class="product-grid">
            { for p.products.iter().map(|product| html! {
                <ProductCard key={product.id.get()} product={product.clone()} on_add={p.on_add.clone()} />
            }) }
        </div>
    }
}
