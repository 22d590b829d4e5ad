//! Ordering Exercise App
//!
//! Composes the interactive list, the action controls, the feedback slot
//! and the static solution list around one immutable configuration.

use leptos::prelude::*;

use crate::components::{OffenderNotice, OrderingList, SolutionList};
use crate::context::DragContext;
use crate::models::{ExerciseConfig, Polarity};
use crate::shuffle;

#[component]
pub fn App(config: ExerciseConfig) -> impl IntoView {
    let has_valid_key = config.has_valid_key();

    let mut initial_order = config.identifiers();
    shuffle::shuffle(&mut initial_order);

    // Without a usable key the exercise degrades to reorder-only.
    let initial_feedback = (!has_valid_key).then(|| {
        (
            "No valid answer key - you can reorder, but not check.".to_string(),
            Polarity::Neutral,
        )
    });

    let (dragging, set_dragging) = signal(None::<usize>);
    let (display_order, set_display_order) = signal(initial_order);
    let (feedback, set_feedback) = signal(initial_feedback);
    let (revealed, set_revealed) = signal(false);

    let ctx = DragContext::new((dragging, set_dragging), (display_order, set_display_order));
    provide_context(ctx);

    let cfg = StoredValue::new(config.clone());

    let on_check = move |_| {
        if !has_valid_key {
            return;
        }
        let current = display_order.get_untracked();
        let ok = cfg.with_value(|c| c.is_correct(&current));
        set_feedback.set(Some(if ok {
            ("Correct!".to_string(), Polarity::Good)
        } else {
            (
                "Not quite. 'Show solution' can help.".to_string(),
                Polarity::Bad,
            )
        }));
    };

    let on_show = move |_| {
        if !has_valid_key {
            return;
        }
        ctx.replace_order(cfg.with_value(|c| c.key.clone()));
        set_revealed.set(true);
        set_feedback.set(Some(("Solution revealed.".to_string(), Polarity::Neutral)));
    };

    let on_reset = move |_| {
        ctx.update_order(|ord| shuffle::shuffle(ord));
        set_revealed.set(false);
        set_feedback.set(None);
    };

    view! {
        <div class="odnd-exercise">
            <OffenderNotice offenders=config.offenders.clone()/>

            <OrderingList config=cfg revealed=revealed/>

            <div class="odnd-controls">
                <button class="odnd-check" disabled=!has_valid_key on:click=on_check>
                    "Check"
                </button>
                <button class="odnd-show" disabled=!has_valid_key on:click=on_show>
                    "Show solution"
                </button>
                <button class="odnd-reset" on:click=on_reset>
                    "Reset"
                </button>
            </div>

            <p class=move || feedback_class(feedback.get().as_ref())>
                {move || feedback.get().map(|(msg, _)| msg).unwrap_or_default()}
            </p>

            {has_valid_key.then(|| view! { <SolutionList config=config.clone()/> })}
        </div>
    }
}

fn feedback_class(slot: Option<&(String, Polarity)>) -> String {
    match slot {
        Some((_, polarity)) => format!("odnd-feedback {}", polarity.css_class())
            .trim_end()
            .to_string(),
        None => "odnd-feedback".to_string(),
    }
}
