//! Clipboard access for the paste-JSON prefill
//!
//! Reading needs a secure context and the user's permission; every failure is
//! reported as a message so the dialog can fall back to the paste textarea.

use wasm_bindgen_futures::JsFuture;

const CLIPBOARD_UNAVAILABLE: &str = "Буфер обмена недоступен, вставьте JSON в поле ниже.";

/// Read the clipboard as text
pub async fn read_clipboard_text() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| CLIPBOARD_UNAVAILABLE.to_string())?;
    let clipboard = window.navigator().clipboard();
    let value = JsFuture::from(clipboard.read_text()).await.map_err(|e| {
        log::warn!("Clipboard read failed: {e:?}");
        CLIPBOARD_UNAVAILABLE.to_string()
    })?;
    value
        .as_string()
        .ok_or_else(|| CLIPBOARD_UNAVAILABLE.to_string())
}
