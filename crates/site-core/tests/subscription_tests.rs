// Host-side tests for self-cancelling subscriptions.

use site_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn cancel_runs_release_once() {
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let sub = Subscription::new(move || c.set(c.get() + 1));
    assert!(sub.is_active());
    assert!(sub.cancel());
    assert!(!sub.cancel());
    assert_eq!(calls.get(), 1);
}

#[test]
fn cancel_breaks_a_self_referencing_loop() {
    // A frame task owning a handle to its own release, as a finished
    // counter animation does.
    struct Task {
        _release: Subscription,
    }
    let slot: Rc<RefCell<Option<Task>>> = Rc::new(RefCell::new(None));
    let release_slot = slot.clone();
    let sub = Subscription::new(move || {
        release_slot.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(Task {
        _release: sub.clone(),
    });

    let weak = Rc::downgrade(&slot);
    drop(slot);
    assert!(weak.upgrade().is_some(), "task keeps itself alive while running");

    assert!(sub.cancel());
    assert!(weak.upgrade().is_none(), "task released after cancel");
}
