//! Window scroll reset used on page changes.

/// Scroll the window back to the top. No-op outside the browser.
pub fn to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
