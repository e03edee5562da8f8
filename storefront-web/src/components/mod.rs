pub mod cart_panel;
pub mod category_bar;
pub mod footer;
pub mod header;
pub mod product_card;
pub mod product_grid;
