// Accessibility helpers

/// Id of the polite live region that announces cart changes.
pub const STATUS_REGION_ID: &str = "store-status";

/// Update the live region status for screen readers
///
/// Replaces the text of the `#store-status` element if present. No-op outside the browser.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
        {
            node.set_text_content(Some(msg));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}
