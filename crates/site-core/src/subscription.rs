use std::cell::RefCell;
use std::rc::Rc;

type CancelFn = Box<dyn FnOnce()>;

/// Handle to a visibility (or similar) subscription that can cancel itself.
///
/// Clones share state, so a callback holding a clone may cancel the
/// subscription it was delivered through. Cancelling twice is a no-op.
#[derive(Clone)]
pub struct Subscription {
    on_cancel: Rc<RefCell<Option<CancelFn>>>,
}

impl Subscription {
    pub fn new(on_cancel: impl FnOnce() + 'static) -> Self {
        Self {
            on_cancel: Rc::new(RefCell::new(Some(Box::new(on_cancel)))),
        }
    }

    /// Returns true if this call did the cancelling.
    pub fn cancel(&self) -> bool {
        let f = self.on_cancel.borrow_mut().take();
        match f {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.on_cancel.borrow().is_some()
    }

    /// Run `f` only on the first trigger, unsubscribing before it runs.
    pub fn fire_once(&self, f: impl FnOnce()) -> bool {
        if self.cancel() {
            f();
            true
        } else {
            false
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
