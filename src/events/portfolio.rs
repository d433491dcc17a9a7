use site_core::{EventKind, EventSource, Filter, ItemChange, ItemDisplay, Portfolio};
use site_core::{FILTER_FADE_IN_DELAY_MS, FILTER_FADE_OUT_MS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use super::{current_element, Registry};
use crate::constants::*;
use crate::dom;

fn show(items: &Rc<Vec<web::Element>>, grid: &Rc<RefCell<Portfolio>>, i: usize) {
    dom::set_style(&items[i], "display", "block");
    let (items, grid) = (items.clone(), grid.clone());
    dom::set_timeout(FILTER_FADE_IN_DELAY_MS, move || {
        // a later filter may have started fading this item out
        if grid.borrow().items()[i].display != ItemDisplay::Shown {
            return;
        }
        dom::set_style(&items[i], "opacity", "1");
        dom::set_style(&items[i], "transform", "translateY(0)");
    });
}

fn fade_out(
    items: &Rc<Vec<web::Element>>,
    grid: &Rc<RefCell<Portfolio>>,
    i: usize,
    generation: u64,
) {
    dom::set_style(&items[i], "opacity", "0");
    dom::set_style(&items[i], "transform", "translateY(20px)");
    let (items, grid) = (items.clone(), grid.clone());
    dom::set_timeout(FILTER_FADE_OUT_MS, move || {
        if grid.borrow_mut().finish_fade(i, generation) {
            dom::set_style(&items[i], "display", "none");
        }
    });
}

pub fn register_filters(reg: &mut Registry, document: &web::Document) {
    let buttons = dom::query_all(document, FILTER_BUTTON_SELECTOR);
    let items = dom::query_all(document, PORTFOLIO_ITEM_SELECTOR);
    if buttons.is_empty() || items.is_empty() {
        return;
    }
    let grid = Rc::new(RefCell::new(Portfolio::new(
        items.iter().map(|it| it.get_attribute(CATEGORY_ATTR)),
    )));
    let items = Rc::new(items);

    reg.register(
        EventSource::selector(FILTER_BUTTON_SELECTOR, EventKind::Click),
        move |ev| {
            let Some(button) = current_element(ev) else {
                return;
            };
            for b in &buttons {
                _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = button.class_list().add_1(ACTIVE_CLASS);

            let filter = Filter::from_attr(button.get_attribute(FILTER_ATTR).as_deref());
            log::debug!("[portfolio] filter {:?}", filter);
            let changes = grid.borrow_mut().apply(filter);
            for change in changes {
                match change {
                    ItemChange::Show(i) => show(&items, &grid, i),
                    ItemChange::FadeOut { index, generation } => {
                        fade_out(&items, &grid, index, generation)
                    }
                }
            }
        },
    );
}
