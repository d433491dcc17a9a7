use site_core::{EventKind, EventSource, PreferenceStore, Theme};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{current_element, Registry};
use crate::constants::*;
use crate::dom;

/// Apply a saved theme on load and persist switch changes.
pub fn register_theme_switch(
    reg: &mut Registry,
    document: &web::Document,
    prefs: &Rc<PreferenceStore>,
) {
    let switch = document
        .get_element_by_id(THEME_SWITCH_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());

    match prefs.stored_theme() {
        Ok(Some(saved)) => {
            dom::apply_theme_attr(saved);
            if let Some(sw) = &switch {
                sw.set_checked(saved.is_dark());
            }
            log::info!("[theme] restored {}", saved);
        }
        Ok(None) => {}
        Err(e) => log::warn!("[theme] ignoring stored theme: {}", e),
    }

    if switch.is_none() {
        log::debug!("[theme] no #{} on page", THEME_SWITCH_ID);
        return;
    }
    let prefs = prefs.clone();
    reg.register(
        EventSource::selector(THEME_SWITCH_SELECTOR, EventKind::Change),
        move |ev| {
            let checked = current_element(ev)
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(false);
            prefs.set_theme(Theme::from_switch(checked));
        },
    );
}

/// Language links mark the next load to skip the intro.
pub fn register_language_links(reg: &mut Registry, prefs: &Rc<PreferenceStore>) {
    let prefs = prefs.clone();
    reg.register(
        EventSource::selector(LANG_SWITCH_LINKS_SELECTOR, EventKind::Click),
        move |_| prefs.set_skip_flag(),
    );
}

/// `#langToggle` opens its dropdown; clicks anywhere else close it.
pub fn register_language_dropdown(reg: &mut Registry, document: &web::Document) {
    let Some(toggle) = document.get_element_by_id(LANG_TOGGLE_ID) else {
        return;
    };
    let Some(dropdown) = toggle.closest(LANG_DROPDOWN_SELECTOR).ok().flatten() else {
        log::debug!("[lang] toggle is not inside {}", LANG_DROPDOWN_SELECTOR);
        return;
    };

    let open = dropdown.clone();
    reg.register(
        EventSource::selector(LANG_TOGGLE_SELECTOR, EventKind::Click),
        move |ev| {
            ev.stop_propagation();
            _ = open.class_list().toggle(ACTIVE_CLASS);
        },
    );

    reg.register(EventSource::document(EventKind::Click), move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .map(|node| dropdown.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            _ = dropdown.class_list().remove_1(ACTIVE_CLASS);
        }
    });
}
