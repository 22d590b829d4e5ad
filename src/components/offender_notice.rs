//! Offender Notice Component
//!
//! Non-blocking warning listing items whose text spans multiple lines.
//! The items stay in the exercise regardless.

use leptos::prelude::*;

#[component]
pub fn OffenderNotice(
    /// 1-based slot numbers of multi-line items
    offenders: Vec<usize>,
) -> impl IntoView {
    (!offenders.is_empty()).then(|| {
        let listed = offenders
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        view! {
            <div class="odnd-notice">
                {format!("Items with internal line breaks: {listed}. They remain in the exercise but may display oddly.")}
            </div>
        }
    })
}
