//! Ordering Item Component
//!
//! A single draggable list entry.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use crate::context::DragContext;

/// One reorderable row of the interactive list
#[component]
pub fn OrderingItem(
    /// Fixed identifier (0-based original index)
    index: usize,
    /// Normalized display text
    text: String,
) -> impl IntoView {
    let ctx = use_context::<DragContext>().expect("DragContext should be provided");

    let on_dragstart = move |ev: DragEvent| {
        ctx.begin_drag(index);
        // The signal carries the identifier; payload failures are non-fatal.
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &index.to_string());
        }
    };

    let on_dragend = move |_: DragEvent| ctx.end_drag();

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        let before = (ev.client_y() as f64 - rect.top()) < rect.height() / 2.0;
        ctx.drag_over(index, before);
    };

    view! {
        <li
            class=move || {
                if ctx.dragging.get() == Some(index) { "odnd-item dragging" } else { "odnd-item" }
            }
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragend=on_dragend
        >
            {text}
        </li>
    }
}
