//! Passport detail page at `/battery-passport/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route id is read and logged but does not select data yet: every id
//! shows the compiled-in sample record until a passport source exists.

#[cfg(test)]
#[path = "battery_passport_test.rs"]
mod battery_passport_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use passport::PassportRecord;

use crate::components::passport_view::PassportView;

/// Record shown for a requested passport id.
pub fn record_for_route(id: &str) -> PassportRecord {
    leptos::logging::log!("passport route requested id {id}");
    passport::sample_record()
}

#[component]
pub fn BatteryPassportPage() -> impl IntoView {
    let params = use_params_map();
    let requested_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="passport-page">
            {move || view! { <PassportView record=record_for_route(&requested_id())/> }}
        </div>
    }
}
