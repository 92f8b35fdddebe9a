//! Connect-wallet button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking starts one account request against the injected provider. There
//! is no busy guard; a second click while the extension prompt is open simply
//! issues another request, and whichever resolves last wins.

use leptos::prelude::*;
use passport::Icon;

use crate::components::icon::IconGlyph;
use crate::state::wallet::WalletState;

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let on_click = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let provider = crate::net::ethereum::InjectedProvider::detect();
            let result = crate::net::wallet::connect(provider.as_ref()).await;
            wallet.update(|state| state.apply(result));
        });
    };

    view! {
        <button
            class="wallet-button"
            class:wallet-button--connected=move || wallet.with(WalletState::connected)
            on:click=on_click
        >
            <IconGlyph icon=Icon::Wallet class="wallet-button__icon"/>
            <span>{move || wallet.with(WalletState::button_label)}</span>
        </button>
    }
}
