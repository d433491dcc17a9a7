#![cfg(target_arch = "wasm32")]
use site_core::{EventKind, EventSource, PreferenceStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod observe;
mod preloader;

use constants::CANVAS_ID;

fn build_prefs(window: &web::Window) -> Rc<PreferenceStore> {
    let durable = dom::storage_or_memory(window.local_storage(), "localStorage");
    let session = dom::storage_or_memory(window.session_storage(), "sessionStorage");
    Rc::new(PreferenceStore::new(durable, session).with_theme_applier(dom::apply_theme_attr))
}

/// Canvas backdrop: sized now, resized with the window, animated once the
/// icon font is ready.
fn wire_backdrop(reg: &mut events::Registry, document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::debug!("[backdrop] no #{} on page", CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(canvas, document.clone())?));

    let resize_ctx = frame_ctx.clone();
    reg.register(EventSource::window(EventKind::Resize), move |_| {
        resize_ctx.borrow_mut().resize();
    });

    let doc = document.clone();
    spawn_local(async move {
        frame::fonts_ready(&doc).await;
        frame::start_loop(frame_ctx);
    });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    dom::when_dom_ready(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let prefs = build_prefs(&window);

    preloader::run(&document, &prefs);

    let mut reg = events::Registry::new();
    if let Err(e) = wire_backdrop(&mut reg, &document) {
        log::error!("[backdrop] disabled: {:?}", e);
    }
    events::prefs::register_language_links(&mut reg, &prefs);
    events::nav::register_mobile_menu(&mut reg, &document);
    events::nav::register_smooth_scroll(&mut reg, &document);
    events::nav::register_header_shadow(&mut reg, &document);
    events::form::register_contact_form(&mut reg, &document);
    events::portfolio::register_filters(&mut reg, &document);
    events::prefs::register_theme_switch(&mut reg, &document, &prefs);
    events::prefs::register_language_dropdown(&mut reg, &document);
    events::bind(reg, &document);

    if let Err(e) = observe::wire_scroll_reveal(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    if let Err(e) = observe::wire_counters(&document) {
        log::warn!("[counter] disabled: {:?}", e);
    }
    Ok(())
}
