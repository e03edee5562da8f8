#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod catalog;
pub mod components;
pub mod i18n;
pub mod logging;
pub mod paths;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    // Ensure <html lang, dir> match the saved locale before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    log::info!("Storefront starting with {} products", catalog::catalog().len());
    yew::Renderer::<app::App>::new().render();
}
