//! Ordering List Component
//!
//! The interactive list. Renders the display order through a keyed
//! `<For/>`; drag events mutate the order signal and the DOM follows.

use leptos::prelude::*;

use super::OrderingItem;
use crate::context::DragContext;
use crate::models::ExerciseConfig;

#[component]
pub fn OrderingList(
    config: StoredValue<ExerciseConfig>,
    /// Whether the solution has been revealed into this list
    revealed: ReadSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<DragContext>().expect("DragContext should be provided");

    view! {
        <ul class=move || if revealed.get() { "odnd-list revealed" } else { "odnd-list" }>
            <For
                each=move || ctx.order.get()
                key=|idx| *idx
                children=move |idx| {
                    let text = config.with_value(|c| c.text_of(idx).to_string());
                    view! { <OrderingItem index=idx text=text/> }
                }
            />
        </ul>
    }
}
