// Host-side tests for counters and one-shot subscriptions.

use site_core::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn counts_linearly_and_lands_on_target() {
    let mut c = CounterAnimation::new(100);
    assert_eq!(c.value_at(0.0), 0);
    assert!(c.start(0.0));
    assert_eq!(c.tick(0.0).value, 0);
    assert_eq!(c.tick(500.0).value, 25);
    assert_eq!(c.tick(1000.0).value, 50);
    let last = c.tick(1999.0);
    assert_eq!(last.value, 99);
    assert!(!last.finished);
    let done = c.tick(COUNTER_DURATION_MS);
    assert_eq!(done, CounterFrame { value: 100, finished: true });
    assert_eq!(c.tick(5000.0).value, 100);
}

#[test]
fn counter_does_not_restart() {
    let mut c = CounterAnimation::new(100);
    assert!(c.start(0.0));
    c.tick(2000.0);
    assert!(!c.start(3000.0));
    assert_eq!(c.tick(3000.0).value, 100);
    assert!(c.is_finished());
}

#[test]
fn zero_duration_jumps_to_target() {
    let mut c = CounterAnimation::with_duration(7, 0.0);
    c.start(10.0);
    assert_eq!(c.tick(10.0), CounterFrame { value: 7, finished: true });
}

#[test]
fn parse_target_follows_integer_prefix() {
    assert_eq!(parse_target("150"), Some(150));
    assert_eq!(parse_target("  25+"), Some(25));
    assert_eq!(parse_target("-3"), Some(-3));
    assert_eq!(parse_target("12.9"), Some(12));
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target(""), None);
}

#[test]
fn visibility_callback_fires_once_per_element() {
    let unobserved = Rc::new(Cell::new(0));
    let u = unobserved.clone();
    let sub = Subscription::new(move || u.set(u.get() + 1));

    let mut counter = CounterAnimation::new(100);
    let mut starts = 0;
    for now in [0.0, 50.0, 4000.0] {
        // each intersection delivers through a clone of the handle
        let handle = sub.clone();
        handle.fire_once(|| {
            if counter.start(now) {
                starts += 1;
            }
        });
    }
    assert_eq!(starts, 1);
    assert_eq!(unobserved.get(), 1);
    assert!(!sub.is_active());
    assert!(!sub.cancel());
    assert_eq!(counter.tick(2000.0).value, 100);
}
