//! One-shot viewport observers for scroll reveal and counters.

use instant::Instant;
use site_core::{parse_target, CounterAnimation, Reveal, Subscription};
use site_core::{COUNTER_VISIBILITY_THRESHOLD, REVEAL_VISIBILITY_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::*;
use crate::{dom, frame};

type Watched = Rc<RefCell<Vec<(web::Element, Subscription)>>>;

/// Observe `elements` and call `on_visible` the first time each one
/// intersects the viewport; its subscription is cancelled before the call.
pub fn observe_once(
    elements: Vec<web::Element>,
    threshold: f64,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<Vec<Subscription>> {
    let watched: Watched = Rc::new(RefCell::new(Vec::with_capacity(elements.len())));

    let lookup = watched.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let sub = lookup
                    .borrow()
                    .iter()
                    .find(|(el, _)| *el == target)
                    .map(|(_, s)| s.clone());
                if let Some(sub) = sub {
                    sub.fire_once(|| on_visible(&target));
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let mut subs = Vec::with_capacity(elements.len());
    for el in elements {
        let obs = observer.clone();
        let target = el.clone();
        let sub = Subscription::new(move || obs.unobserve(&target));
        observer.observe(&el);
        watched.borrow_mut().push((el, sub.clone()));
        subs.push(sub);
    }
    Ok(subs)
}

pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }
    for el in &elements {
        dom::set_style(el, "opacity", "0");
    }
    let count = elements.len();
    observe_once(elements, REVEAL_VISIBILITY_THRESHOLD, |el| {
        let reveal = Reveal::from_attrs(
            el.get_attribute(ANIMATE_ATTR).as_deref(),
            el.get_attribute(DELAY_ATTR).as_deref(),
        );
        let el = el.clone();
        dom::set_timeout(reveal.delay_ms as i32, move || {
            _ = el.class_list().add_1(&reveal.class_name());
            dom::set_style(&el, "opacity", "1");
        });
    })?;
    log::info!("[reveal] watching {} element(s)", count);
    Ok(())
}

fn run_counter(el: web::Element, mut anim: CounterAnimation) {
    let start = Instant::now();
    anim.start(0.0);
    frame::request_frames(move || {
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        let f = anim.tick(now_ms);
        el.set_text_content(Some(&f.value.to_string()));
        !f.finished
    });
}

pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, COUNTER_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }
    observe_once(elements, COUNTER_VISIBILITY_THRESHOLD, |el| {
        let raw = el.get_attribute(COUNTER_TARGET_ATTR).unwrap_or_default();
        match parse_target(&raw) {
            Some(target) => run_counter(el.clone(), CounterAnimation::new(target)),
            None => log::debug!("[counter] bad {} {:?}", COUNTER_TARGET_ATTR, raw),
        }
    })?;
    Ok(())
}
