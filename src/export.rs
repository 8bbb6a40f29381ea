//! Image Export Glue (WASM only)
//!
//! Captures the rendered grid region through the page-global `html2canvas`
//! and triggers a PNG download. The capture library is loaded by index.html.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// Global from the html2canvas script tag
    #[wasm_bindgen(js_name = html2canvas)]
    fn html2canvas(element: &web_sys::Element, options: JsValue) -> js_sys::Promise;
}

#[derive(Serialize)]
struct CaptureOptions {
    #[serde(rename = "useCORS")]
    use_cors: bool,
}

/// Capture the element with `element_id` and download it as `filename`
pub async fn export_element_as_png(element_id: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("element '{}' not found", element_id))?;

    let options = serde_wasm_bindgen::to_value(&CaptureOptions { use_cors: true })
        .map_err(|e| e.to_string())?;
    let captured = JsFuture::from(html2canvas(&element, options))
        .await
        .map_err(|_| "capture failed".to_string())?;
    let canvas: web_sys::HtmlCanvasElement = captured
        .dyn_into()
        .map_err(|_| "capture did not produce a canvas".to_string())?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| "canvas encode failed".to_string())?;

    // Synthetic <a download> click, same trick as the original exporter
    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create link".to_string())?
        .dyn_into()
        .map_err(|_| "failed to create link".to_string())?;
    link.set_href(&data_url);
    link.set_download(filename);
    link.click();
    Ok(())
}
