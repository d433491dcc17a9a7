use site_core::{PreferenceStore, PreloaderPlan};
use web_sys as web;

use crate::constants::{HIDDEN_CLASS, PRELOADER_ID};
use crate::dom;

/// Play or skip the intro depending on the one-shot skip flag.
pub fn run(document: &web::Document, prefs: &PreferenceStore) {
    let Some(el) = document.get_element_by_id(PRELOADER_ID) else {
        return;
    };
    match PreloaderPlan::for_load(prefs.consume_skip_flag()) {
        PreloaderPlan::Skip => {
            log::info!("[preloader] skipped after language switch");
            el.remove();
        }
        PreloaderPlan::Play {
            hide_after_ms,
            remove_after_ms,
        } => {
            dom::set_timeout(hide_after_ms, move || {
                _ = el.class_list().add_1(HIDDEN_CLASS);
                dom::set_timeout(remove_after_ms, move || el.remove());
            });
        }
    }
}
