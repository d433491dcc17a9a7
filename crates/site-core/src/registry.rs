//! Explicit table of event bindings.
//!
//! Every listener the front-end installs is declared here first, keyed by
//! the element selector and event kind. The browser layer then attaches one
//! DOM listener per source that forwards into [`HandlerRegistry::dispatch`].

use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    Change,
    Submit,
    Scroll,
    Resize,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
            EventKind::Scroll => "scroll",
            EventKind::Resize => "resize",
        }
    }
}

/// Where a listener attaches: `window`, `document`, or every element
/// matching a CSS selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Window,
    Document,
    Selector(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventSource {
    pub target: Target,
    pub kind: EventKind,
}

impl EventSource {
    pub fn window(kind: EventKind) -> Self {
        Self {
            target: Target::Window,
            kind,
        }
    }

    pub fn document(kind: EventKind) -> Self {
        Self {
            target: Target::Document,
            kind,
        }
    }

    pub fn selector(selector: &str, kind: EventKind) -> Self {
        Self {
            target: Target::Selector(selector.to_string()),
            kind,
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Window => write!(f, "window:{}", self.kind.as_str()),
            Target::Document => write!(f, "document:{}", self.kind.as_str()),
            Target::Selector(s) => write!(f, "{}:{}", s, self.kind.as_str()),
        }
    }
}

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

pub struct HandlerRegistry<E> {
    handlers: FnvHashMap<EventSource, SmallVec<[Handler<E>; 1]>>,
    order: Vec<EventSource>,
}

impl<E> Default for HandlerRegistry<E> {
    fn default() -> Self {
        Self {
            handlers: FnvHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<E> HandlerRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, source: EventSource, handler: impl FnMut(&E) + 'static) {
        let slot = self.handlers.entry(source.clone()).or_insert_with(|| {
            self.order.push(source);
            SmallVec::new()
        });
        slot.push(Rc::new(RefCell::new(handler)));
    }

    /// Run the handlers for `source` in registration order; returns how
    /// many ran.
    ///
    /// Dispatch only needs `&self`, so a handler may dispatch other events
    /// synchronously. A handler that is already running is skipped rather
    /// than re-entered.
    pub fn dispatch(&self, source: &EventSource, event: &E) -> usize {
        let Some(list) = self.handlers.get(source) else {
            return 0;
        };
        let mut ran = 0;
        for h in list {
            match h.try_borrow_mut() {
                Ok(mut h) => {
                    (&mut *h)(event);
                    ran += 1;
                }
                Err(_) => log::debug!("[registry] {} handler busy, skipped", source),
            }
        }
        ran
    }

    /// Sources in the order they were first registered.
    pub fn sources(&self) -> &[EventSource] {
        &self.order
    }

    pub fn handler_count(&self, source: &EventSource) -> usize {
        self.handlers.get(source).map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
