//! Inline SVG icon.

use leptos::prelude::*;
use passport::Icon;

use crate::util::icons::svg_paths;

/// Stroked 24x24 glyph for `icon`, sized by the caller's CSS class.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.name()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {svg_paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
