//! Host Page Input
//!
//! Reads raw exercise data from the embedding page: either data-*
//! attributes on the carrier element, or editable fields with
//! conventional names.

use wasm_bindgen::JsCast;

use crate::config::{RawInput, MAX_SLOTS};

/// Id of the configuration carrier element
pub const DATA_ID: &str = "odnd-data";
/// Class of the mount root for the interactive component
pub const ROOT_CLASS: &str = "odnd-root";

/// Read raw input from the host page. `None` when the carrier element
/// is missing entirely.
pub fn read_raw_input() -> Option<RawInput> {
    let document = web_sys::window()?.document()?;
    let carrier = document.get_element_by_id(DATA_ID)?;

    // Attribute mode wins; a carrier without item attributes delegates
    // to named editable fields.
    let raw = read_attributes(&carrier);
    if raw.slots.iter().any(|slot| slot.is_some()) {
        return Some(raw);
    }
    Some(read_fields(&document))
}

/// Sourcing mode (a): data-item1..data-item20, data-key, data-max
fn read_attributes(carrier: &web_sys::Element) -> RawInput {
    let slots = (1..=MAX_SLOTS)
        .map(|i| carrier.get_attribute(&format!("data-item{i}")))
        .collect();
    RawInput {
        slots,
        key: carrier.get_attribute("data-key"),
        max: carrier.get_attribute("data-max"),
    }
}

/// Sourcing mode (b): editable fields named Item1..Item20, Key, Max
fn read_fields(document: &web_sys::Document) -> RawInput {
    let slots = (1..=MAX_SLOTS)
        .map(|i| field_value(document, &format!("Item{i}")))
        .collect();
    RawInput {
        slots,
        key: field_value(document, "Key"),
        max: field_value(document, "Max"),
    }
}

/// Value of the first input or textarea with the given name
fn field_value(document: &web_sys::Document, name: &str) -> Option<String> {
    let el = document
        .query_selector(&format!("[name='{name}']"))
        .ok()??;
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
}

/// Element the app mounts into: the .odnd-root container, else the body.
pub fn mount_root() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    if let Ok(Some(el)) = document.query_selector(&format!(".{ROOT_CLASS}")) {
        if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
            return Some(el);
        }
    }
    document.body()
}
