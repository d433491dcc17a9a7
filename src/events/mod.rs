pub mod form;
pub mod nav;
pub mod portfolio;
pub mod prefs;

use site_core::{EventSource, HandlerRegistry, Target};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub type Registry = HandlerRegistry<web::Event>;

/// Element the listener that received `ev` is attached to.
#[inline]
pub fn current_element(ev: &web::Event) -> Option<web::Element> {
    ev.current_target()?.dyn_into::<web::Element>().ok()
}

/// Attach one DOM listener per registered source. Each listener forwards to
/// the registry, which runs the handlers declared for that source. The
/// registry is frozen here; handlers may dispatch further events while
/// running.
pub fn bind(registry: Registry, document: &web::Document) {
    let sources = registry.sources().to_vec();
    let registry = Rc::new(registry);
    for source in sources {
        let targets: Vec<web::EventTarget> = match &source.target {
            Target::Window => web::window().map(Into::into).into_iter().collect(),
            Target::Document => vec![document.clone().into()],
            Target::Selector(sel) => dom::query_all(document, sel)
                .into_iter()
                .map(Into::into)
                .collect(),
        };
        if targets.is_empty() {
            log::debug!("[events] {} has no elements, skipped", source);
            continue;
        }
        log::info!(
            "[events] bound {} ({} element(s), {} handler(s))",
            source,
            targets.len(),
            registry.handler_count(&source)
        );
        for target in targets {
            listen(&target, &source, registry.clone());
        }
    }
}

fn listen(target: &web::EventTarget, source: &EventSource, registry: Rc<Registry>) {
    let src = source.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        registry.dispatch(&src, &ev);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(
        source.kind.as_str(),
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();
}
