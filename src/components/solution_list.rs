//! Solution List Component
//!
//! Read-only list of item texts in key order, rendered once at
//! initialization and never mutated afterwards.

use leptos::prelude::*;

use crate::models::ExerciseConfig;

#[component]
pub fn SolutionList(config: ExerciseConfig) -> impl IntoView {
    let texts: Vec<String> = config
        .key
        .iter()
        .map(|&idx| config.text_of(idx).to_string())
        .collect();

    view! {
        <div class="odnd-solution">
            <h2>"Solution"</h2>
            <ol class="odnd-solution-list">
                {texts.into_iter().map(|text| view! { <li>{text}</li> }).collect_view()}
            </ol>
        </div>
    }
}
