//! Keyboard shortcut that jumps from a page to its `-/view-src/` rendering.

use crate::config::ThemeConfig;

#[cfg(test)]
#[path = "view_source_test.rs"]
mod view_source_test;

const VIEW_SOURCE_SEGMENT: &str = "-/view-src/";

/// Build the view-source URL for `href` relative to the document base.
pub fn view_source_url(base_uri: &str, href: &str) -> String {
    let separator = if base_uri.ends_with('/') { "" } else { "/" };
    let relative = href.replacen(base_uri, "", 1);
    format!("{base_uri}{separator}{VIEW_SOURCE_SEGMENT}{relative}")
}

pub fn is_view_source_key(key: &str, config: &ThemeConfig) -> bool {
    key == config.view_source_key
}

/// Listen for the shortcut key on `document` for the rest of the page lifetime.
#[cfg(feature = "hydrate")]
pub fn install(config: &ThemeConfig) -> Result<(), crate::error::ThemeError> {
    use wasm_bindgen::{JsCast, closure::Closure};

    use crate::error::ThemeError;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Browser("no document".to_owned()))?;

    let shortcut = config.clone();
    let cb = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        if !is_view_source_key(&ev.key(), &shortcut) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let base_uri = window
            .document()
            .and_then(|d| d.base_uri().ok().flatten())
            .unwrap_or_default();
        let Ok(href) = location.href() else {
            return;
        };
        let _ = location.set_href(&view_source_url(&base_uri, &href));
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    document
        .add_event_listener_with_callback("keypress", cb.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Browser(format!("{e:?}")))?;
    cb.forget();
    Ok(())
}
