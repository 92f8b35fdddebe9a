//! Sticky site header with brand marks and the wallet button.

use leptos::prelude::*;

use crate::components::wallet_button::WalletButton;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    <img class="site-header__logo" src="/Logo.png" alt="Logo"/>
                    <img class="site-header__name" src="/LogoName.png" alt="LogoName"/>
                </a>
                <WalletButton/>
            </div>
        </header>
    }
}
