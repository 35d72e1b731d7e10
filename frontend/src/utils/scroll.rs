/// Scrolls the document back to the top-left corner.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Ok(window) = super::storage::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}
