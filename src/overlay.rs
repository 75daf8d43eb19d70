use crate::constants::{CONTENT_ID, DEFAULT_TITLE_ATTR, OVERLAY_ID, TITLE_ID, VISIBLE_CLASS};
use globe_core::constants::SITE_NAME;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1(VISIBLE_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1(VISIBLE_CLASS);
    }
}

/// Heading text and browser tab title.
pub fn set_title(document: &web::Document, heading: &str, tab_title: &str) {
    if let Some(el) = document.get_element_by_id(TITLE_ID) {
        el.set_text_content(Some(heading));
    }
    document.set_title(tab_title);
}

/// Title the page starts with, taken from the heading's `data-default`.
pub fn default_title(document: &web::Document) -> String {
    document
        .get_element_by_id(TITLE_ID)
        .and_then(|el| el.get_attribute(DEFAULT_TITLE_ATTR))
        .unwrap_or_else(|| SITE_NAME.to_string())
}

/// Move every child of `source` into the live content element.
pub fn replace_content(document: &web::Document, source: &web::Element) -> anyhow::Result<()> {
    let target = document
        .get_element_by_id(CONTENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CONTENT_ID}"))?;
    target.set_inner_html("");
    while let Some(child) = source.first_child() {
        target
            .append_child(&child)
            .map_err(|e| anyhow::anyhow!("append content: {:?}", e))?;
    }
    Ok(())
}

pub fn clear_content(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTENT_ID) {
        el.set_inner_html("");
    }
}

/// Record `path` as the current URL without adding a history entry.
pub fn replace_history(path: &str) {
    let Some(history) = web::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("[overlay] replaceState {path}: {:?}", e);
    }
}
