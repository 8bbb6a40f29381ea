//! Share Link Glue (WASM only)
//!
//! Builds the shareable URL for a grid, copies it to the clipboard, and
//! extracts an incoming token from the current page URL on load.

use wasm_bindgen_futures::JsFuture;

use crate::exchange::{self, SHARE_PARAM};
use crate::models::TopGrid;

/// Shareable link for `grid`: current origin + path with the token appended
pub fn shareable_link(grid: &TopGrid) -> Option<String> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let pathname = location.pathname().ok()?;
    Some(format!(
        "{}{}?{}={}",
        origin,
        pathname,
        SHARE_PARAM,
        exchange::encode(grid)
    ))
}

/// Copy `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|_| "clipboard write rejected".to_string())
}

/// Token from the page's `?topgrid=` query parameter, if present
pub fn shared_token_from_url() -> Option<String> {
    let location = web_sys::window()?.location();
    let search = location.search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(SHARE_PARAM)
}
