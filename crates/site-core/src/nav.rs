use crate::constants::HEADER_SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Body `overflow` value: scrolling is locked while the menu is open.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}

/// In-page anchor of a link's `href`, or `None` for a bare `#` (which is
/// left to the browser) and non-fragment links.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        None
    } else {
        Some(href)
    }
}

/// Scroll offset that puts `target_top` just under a fixed header.
#[inline]
pub fn scroll_target_top(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}
