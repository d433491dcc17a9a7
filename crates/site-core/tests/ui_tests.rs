// Host-side tests for small UI state helpers and the handler registry.

use site_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn menu_toggle_locks_body_scroll() {
    let mut m = MenuState::default();
    assert_eq!(m.body_overflow(), "");
    assert!(m.toggle());
    assert_eq!(m.body_overflow(), "hidden");
    m.close();
    assert!(!m.open);
    assert_eq!(m.body_overflow(), "");
}

#[test]
fn header_threshold_is_strict() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(50.0));
    assert!(header_scrolled(50.5));
}

#[test]
fn anchor_links() {
    assert_eq!(anchor_selector("#services"), Some("#services"));
    assert_eq!(anchor_selector("#"), None);
    assert_eq!(anchor_selector("/en/index.html"), None);
    assert_eq!(scroll_target_top(900.0, 80.0), 820.0);
}

#[test]
fn reveal_attributes() {
    let r = Reveal::from_attrs(None, None);
    assert_eq!(r.class_name(), "animate-fadeInUp");
    assert_eq!(r.delay_ms, 0.0);

    let r = Reveal::from_attrs(Some("zoomIn"), Some("3"));
    assert_eq!(r.class_name(), "animate-zoomIn");
    assert_eq!(r.delay_ms, 300.0);

    let r = Reveal::from_attrs(Some(""), Some("soon"));
    assert_eq!(r.animation, "fadeInUp");
    assert_eq!(r.delay_ms, 0.0);
}

#[test]
fn preloader_plan() {
    assert_eq!(PreloaderPlan::for_load(true), PreloaderPlan::Skip);
    assert_eq!(
        PreloaderPlan::for_load(false),
        PreloaderPlan::Play {
            hide_after_ms: 2500,
            remove_after_ms: 600
        }
    );
}

#[test]
fn registry_dispatches_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut reg: HandlerRegistry<u32> = HandlerRegistry::new();
    let click = EventSource::selector(".menu-toggle", EventKind::Click);
    let scroll = EventSource::window(EventKind::Scroll);

    let l1 = log.clone();
    reg.register(click.clone(), move |ev| l1.borrow_mut().push(("a", *ev)));
    let l2 = log.clone();
    reg.register(scroll.clone(), move |ev| l2.borrow_mut().push(("s", *ev)));
    let l3 = log.clone();
    reg.register(click.clone(), move |ev| l3.borrow_mut().push(("b", *ev)));

    assert_eq!(reg.sources(), &[click.clone(), scroll.clone()]);
    assert_eq!(reg.handler_count(&click), 2);

    assert_eq!(reg.dispatch(&click, &7), 2);
    assert_eq!(reg.dispatch(&EventSource::document(EventKind::Click), &8), 0);
    assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    assert_eq!(click.to_string(), ".menu-toggle:click");
    assert_eq!(scroll.to_string(), "window:scroll");
}

#[test]
fn handlers_may_dispatch_other_sources() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let slot: Rc<RefCell<Option<Rc<HandlerRegistry<u32>>>>> = Rc::new(RefCell::new(None));
    let submit = EventSource::selector("#contactForm", EventKind::Submit);
    let click = EventSource::selector("button", EventKind::Click);

    let mut reg: HandlerRegistry<u32> = HandlerRegistry::new();
    let (inner, l1) = (slot.clone(), log.clone());
    let submit_src = submit.clone();
    reg.register(click.clone(), move |ev| {
        l1.borrow_mut().push(("click", *ev));
        if let Some(reg) = inner.borrow().as_ref() {
            assert_eq!(reg.dispatch(&submit_src, &(ev + 1)), 1);
        }
    });
    let l2 = log.clone();
    reg.register(submit, move |ev| l2.borrow_mut().push(("submit", *ev)));

    let reg = Rc::new(reg);
    *slot.borrow_mut() = Some(reg.clone());
    assert_eq!(reg.dispatch(&click, &1), 1);
    assert_eq!(*log.borrow(), vec![("click", 1), ("submit", 2)]);
    slot.borrow_mut().take();
}

#[test]
fn running_handler_is_not_reentered() {
    let slot: Rc<RefCell<Option<Rc<HandlerRegistry<u32>>>>> = Rc::new(RefCell::new(None));
    let nested = Rc::new(RefCell::new(None));
    let click = EventSource::document(EventKind::Click);

    let mut reg: HandlerRegistry<u32> = HandlerRegistry::new();
    let (inner, out, src) = (slot.clone(), nested.clone(), click.clone());
    reg.register(click.clone(), move |ev| {
        if *ev == 0 {
            if let Some(reg) = inner.borrow().as_ref() {
                *out.borrow_mut() = Some(reg.dispatch(&src, &1));
            }
        }
    });

    let reg = Rc::new(reg);
    *slot.borrow_mut() = Some(reg.clone());
    assert_eq!(reg.dispatch(&click, &0), 1);
    assert_eq!(*nested.borrow(), Some(0));
    slot.borrow_mut().take();
}
