//! Durable and session-scoped user preferences.
//!
//! Storage is the source of truth: nothing is cached here, every read goes
//! to the backing store. The browser front-end plugs `localStorage` and
//! `sessionStorage` in through [`KeyValueStore`]; tests use [`MemoryStore`].

use crate::theme::{Theme, ThemeParseError};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

pub const THEME_KEY: &str = "theme";
pub const SKIP_INTRO_KEY: &str = "skipPreloader";
pub const SKIP_INTRO_SENTINEL: &str = "true";

/// Flat string key-value storage, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<FnvHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub struct PreferenceStore {
    durable: Rc<dyn KeyValueStore>,
    session: Rc<dyn KeyValueStore>,
    apply_theme: Option<Box<dyn Fn(Theme)>>,
}

impl PreferenceStore {
    pub fn new(durable: Rc<dyn KeyValueStore>, session: Rc<dyn KeyValueStore>) -> Self {
        Self {
            durable,
            session,
            apply_theme: None,
        }
    }

    /// Hook run synchronously by [`set_theme`](Self::set_theme) after the
    /// value is persisted (the web front-end sets `data-theme` here).
    pub fn with_theme_applier(mut self, apply: impl Fn(Theme) + 'static) -> Self {
        self.apply_theme = Some(Box::new(apply));
        self
    }

    /// Saved theme, or `None` when unset or unparseable. Silent, so it is
    /// safe to call often; use [`stored_theme`](Self::stored_theme) to see
    /// why a value was rejected.
    pub fn theme(&self) -> Option<Theme> {
        self.stored_theme().ok().flatten()
    }

    pub fn stored_theme(&self) -> Result<Option<Theme>, ThemeParseError> {
        self.durable
            .get(THEME_KEY)
            .map(|raw| raw.parse::<Theme>())
            .transpose()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.durable.set(THEME_KEY, theme.as_str());
        if let Some(apply) = &self.apply_theme {
            apply(theme);
        }
    }

    /// One-shot read of the skip-intro flag: returns whether it was set and
    /// clears it if so.
    pub fn consume_skip_flag(&self) -> bool {
        let set = self.session.get(SKIP_INTRO_KEY).as_deref() == Some(SKIP_INTRO_SENTINEL);
        if set {
            self.session.remove(SKIP_INTRO_KEY);
        }
        set
    }

    pub fn set_skip_flag(&self) {
        self.session.set(SKIP_INTRO_KEY, SKIP_INTRO_SENTINEL);
    }
}
