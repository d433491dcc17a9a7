use site_core::{form_summary, validate, EventKind, EventSource, FieldKind, FormField};
use site_core::SUBMIT_RESET_AFTER_MS;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{current_element, Registry};
use crate::constants::*;
use crate::dom;

fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn read_field(el: &web::Element) -> FormField {
    let kind = match el.get_attribute("type").as_deref() {
        Some("email") => FieldKind::Email,
        _ => FieldKind::Text,
    };
    FormField {
        name: el.get_attribute("name").unwrap_or_default(),
        value: field_value(el),
        required: el.has_attribute("required"),
        kind,
    }
}

fn show_success(form: web::HtmlFormElement) {
    let Some(button) = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        form.reset();
        return;
    };
    let original = button.inner_html();
    button.set_inner_html(SUBMIT_SUCCESS_HTML);
    button.set_disabled(true);
    dom::set_timeout(SUBMIT_RESET_AFTER_MS, move || {
        form.reset();
        button.set_inner_html(&original);
        button.set_disabled(false);
    });
}

/// Validate `#contactForm` on submit. Submission never leaves the page.
pub fn register_contact_form(reg: &mut Registry, document: &web::Document) {
    if document.get_element_by_id(CONTACT_FORM_ID).is_none() {
        return;
    }
    reg.register(
        EventSource::selector(CONTACT_FORM_SELECTOR, EventKind::Submit),
        |ev| {
            ev.prevent_default();
            let Some(form_el) = current_element(ev) else {
                return;
            };
            let elements = dom::query_all_in(&form_el, FORM_FIELDS_SELECTOR);
            let fields: Vec<FormField> = elements.iter().map(read_field).collect();
            let report = validate(&fields);

            for &i in &report.passed {
                _ = elements[i].class_list().remove_1(ERROR_CLASS);
            }
            for &i in &report.errors {
                _ = elements[i].class_list().add_1(ERROR_CLASS);
            }
            if !report.is_valid() {
                log::debug!("[form] {} field(s) flagged", report.errors.len());
                return;
            }

            log::info!("[form] submitted: {:?}", form_summary(&fields));
            if let Ok(form) = form_el.dyn_into::<web::HtmlFormElement>() {
                show_success(form);
            }
        },
    );
}
