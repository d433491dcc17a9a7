// DOM contract shared by the browser front-end: element ids, selectors,
// class names and data attributes the page markup provides.

// Element ids
pub const PRELOADER_ID: &str = "preloader";
pub const CANVAS_ID: &str = "bg-canvas";
pub const THEME_SWITCH_ID: &str = "themeSwitch";
pub const LANG_TOGGLE_ID: &str = "langToggle";
pub const CONTACT_FORM_ID: &str = "contactForm";

// Selectors
pub const THEME_SWITCH_SELECTOR: &str = "#themeSwitch";
pub const LANG_TOGGLE_SELECTOR: &str = "#langToggle";
pub const LANG_DROPDOWN_SELECTOR: &str = ".lang-dropdown";
pub const LANG_SWITCH_LINKS_SELECTOR: &str = ".lang-option, .lang-menu a";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = ".header";
pub const REVEAL_SELECTOR: &str = "[data-animate]";
pub const CONTACT_FORM_SELECTOR: &str = "#contactForm";
pub const FORM_FIELDS_SELECTOR: &str = "input, textarea, select";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub const COUNTER_SELECTOR: &str = ".stat-number";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ERROR_CLASS: &str = "error";

// Attributes
pub const THEME_ATTR: &str = "data-theme";
pub const ANIMATE_ATTR: &str = "data-animate";
pub const DELAY_ATTR: &str = "data-delay";
pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";
pub const COUNTER_TARGET_ATTR: &str = "data-target";

// Submit button label shown after a valid submission
pub const SUBMIT_SUCCESS_HTML: &str = "<i class=\"fas fa-check\"></i> تم الإرسال بنجاح!";
