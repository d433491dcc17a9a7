use site_core::{anchor_selector, header_scrolled, scroll_target_top, EventKind, EventSource, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{current_element, Registry};
use crate::constants::*;
use crate::dom;

pub fn register_mobile_menu(reg: &mut Registry, document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query(document, MENU_TOGGLE_SELECTOR),
        dom::query(document, NAV_SELECTOR),
    ) else {
        log::debug!("[menu] toggle or nav missing");
        return;
    };
    let state = Rc::new(RefCell::new(MenuState::default()));
    let body = document.body();

    let render = {
        let (toggle, nav, body) = (toggle.clone(), nav.clone(), body.clone());
        move |menu: MenuState| {
            _ = toggle.class_list().toggle_with_force(ACTIVE_CLASS, menu.open);
            _ = nav.class_list().toggle_with_force(ACTIVE_CLASS, menu.open);
            if let Some(body) = &body {
                _ = body.style().set_property("overflow", menu.body_overflow());
            }
        }
    };

    let st = state.clone();
    let render_toggle = render.clone();
    reg.register(
        EventSource::selector(MENU_TOGGLE_SELECTOR, EventKind::Click),
        move |_| {
            st.borrow_mut().toggle();
            render_toggle(*st.borrow());
        },
    );

    reg.register(
        EventSource::selector(NAV_LINK_SELECTOR, EventKind::Click),
        move |_| {
            state.borrow_mut().close();
            render(*state.borrow());
        },
    );
}

pub fn register_smooth_scroll(reg: &mut Registry, document: &web::Document) {
    let doc = document.clone();
    reg.register(
        EventSource::selector(ANCHOR_LINK_SELECTOR, EventKind::Click),
        move |ev| {
            let Some(href) = current_element(ev).and_then(|a| a.get_attribute("href")) else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            ev.prevent_default();
            let Some(target) = dom::query(&doc, selector)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let header_height = dom::query(&doc, HEADER_SELECTOR)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            let top = scroll_target_top(target.offset_top() as f64, header_height);
            if let Some(window) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        },
    );
}

pub fn register_header_shadow(reg: &mut Registry, document: &web::Document) {
    let Some(header) = dom::query(document, HEADER_SELECTOR) else {
        return;
    };
    reg.register(EventSource::window(EventKind::Scroll), move |_| {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        _ = header
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, header_scrolled(y));
    });
}
