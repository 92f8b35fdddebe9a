//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::pages::{battery_passport::BatteryPassportPage, home::HomePage};
use crate::state::wallet::WalletState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wallet state context and mounts header, routes, and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wallet = RwSignal::new(WalletState::default());
    provide_context(wallet);

    view! {
        <Stylesheet id="leptos" href="/pkg/battery-passport.css"/>
        <Title text="Battery Passport"/>

        <div class="app">
            <Header/>
            <Router>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=(StaticSegment("battery-passport"), ParamSegment("id"))
                            view=BatteryPassportPage
                        />
                    </Routes>
                </main>
            </Router>
            <Footer/>
        </div>
    }
}
