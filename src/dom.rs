use site_core::{KeyValueStore, MemoryStore, Theme};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::THEME_ATTR;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn node_list_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Every element matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        {
            log::warn!("[dom] setTimeout failed: {:?}", e);
        }
    }
}

/// Run `f` once the document is parsed (immediately if it already is).
pub fn when_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        f();
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}

pub fn apply_theme_attr(theme: Theme) {
    if let Some(root) = window_document().and_then(|d| d.document_element()) {
        _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
}

pub fn root_theme(document: &web::Document) -> Option<Theme> {
    document
        .document_element()?
        .get_attribute(THEME_ATTR)?
        .parse()
        .ok()
}

/// `localStorage` / `sessionStorage` behind the core store trait.
pub struct WebStore(web::Storage);

impl KeyValueStore for WebStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.0.set_item(key, value) {
            log::warn!("[storage] set {} failed: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        _ = self.0.remove_item(key);
    }
}

/// Wrap a browser storage area, falling back to memory when the browser
/// refuses access (private mode, disabled cookies).
pub fn storage_or_memory(
    storage: Result<Option<web::Storage>, wasm_bindgen::JsValue>,
    label: &str,
) -> Rc<dyn KeyValueStore> {
    match storage {
        Ok(Some(s)) => Rc::new(WebStore(s)),
        other => {
            log::warn!("[storage] {} unavailable ({:?}), using memory", label, other.err());
            Rc::new(MemoryStore::new())
        }
    }
}

pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let Some(w) = web::window() else {
        return (canvas.width() as f64, canvas.height() as f64);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);
    (canvas.width() as f64, canvas.height() as f64)
}
