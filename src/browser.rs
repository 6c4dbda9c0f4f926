//! Browser Helpers
//!
//! Thin wrappers over web-sys for cookies, file reading and root classes.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::CSRF_COOKIE_NAME;

/// Find the anti-forgery token in a `document.cookie` string ("" when absent)
pub fn csrf_from_cookie(cookies: &str) -> String {
    cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE_NAME)
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

/// Anti-forgery token from the page cookies
pub fn csrf_token() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .map(|cookies| csrf_from_cookie(&cookies))
        .unwrap_or_default()
}

/// Current location path, "/" when unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Add or remove a class on the `<html>` element
pub fn set_root_class(class: &str, on: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[THEME] Failed to update root class: {:?}", e).into());
    }
}

/// Read a file as a `data:` URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("{:?}", e))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(|e| format!("{:?}", e))?;
    JsFuture::from(promise).await.map_err(|e| format!("{:?}", e))?;

    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| "FileReader produced no data".to_string())
}
