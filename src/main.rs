//! Ordering Exercise Entry Point
//!
//! Reads the host-page configuration once and mounts the app, or bails
//! out silently when the page carries no usable exercise data.

mod app;
mod components;
mod config;
mod context;
mod host;
mod models;
mod order;
mod shuffle;

use app::App;
use leptos::prelude::*;
use models::ExerciseConfig;

fn main() {
    console_error_panic_hook::set_once();

    let Some(raw) = host::read_raw_input() else {
        web_sys::console::log_1(&"[ODND] no #odnd-data element, not mounting".into());
        return;
    };
    let config = ExerciseConfig::from_raw(&raw);
    if config.items.is_empty() {
        web_sys::console::log_1(&"[ODND] host data holds no items, not mounting".into());
        return;
    }
    web_sys::console::log_1(
        &format!(
            "[ODND] mounting: {} items, key length {}, {} offender(s)",
            config.items.len(),
            config.key.len(),
            config.offenders.len()
        )
        .into(),
    );

    let Some(root) = host::mount_root() else {
        return;
    };
    leptos::mount::mount_to(root, move || view! { <App config=config/> }).forget();
}
