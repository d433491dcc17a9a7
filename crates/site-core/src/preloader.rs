use crate::constants::{PRELOADER_HIDE_AFTER_MS, PRELOADER_REMOVE_AFTER_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPlan {
    /// Remove the preloader right away.
    Skip,
    /// Add the hidden class after `hide_after_ms`, remove the element
    /// `remove_after_ms` after that.
    Play {
        hide_after_ms: i32,
        remove_after_ms: i32,
    },
}

impl PreloaderPlan {
    pub fn for_load(skip_flag_was_set: bool) -> Self {
        if skip_flag_was_set {
            PreloaderPlan::Skip
        } else {
            PreloaderPlan::Play {
                hide_after_ms: PRELOADER_HIDE_AFTER_MS,
                remove_after_ms: PRELOADER_REMOVE_AFTER_MS,
            }
        }
    }
}
