//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">"© 2024 Marklytics. All Rights Reserved."</p>
        </footer>
    }
}
