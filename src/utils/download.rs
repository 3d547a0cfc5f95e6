// ============================================================================
// DOWNLOAD - Descarga de archivos generados en el cliente (Blob + <a download>)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::create_element;

/// Envolver `contents` en un Blob y disparar el diálogo de guardado del navegador
pub fn trigger_download(filename: &str, contents: &str, mime: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // El click es síncrono, la URL ya no hace falta
    Url::revoke_object_url(&url)?;
    log::info!("💾 [DOWNLOAD] {} ({} bytes)", filename, contents.len());
    Ok(())
}
