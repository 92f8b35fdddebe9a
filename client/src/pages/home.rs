//! Landing page: hero, key features, system roles, and call to action.

use leptos::prelude::*;
use passport::Icon;

use crate::components::icon::IconGlyph;
use crate::util::landing::{FEATURES, LandingCard, ROLES, card_class};

#[component]
pub fn HomePage() -> impl IntoView {
    let features = FEATURES.iter().map(feature_card).collect_view();
    let roles = ROLES.iter().map(role_card).collect_view();

    view! {
        <div class="home">
            <section class="home__hero">
                <h2 class="home__headline">"Battery Passport for Electric Vehicles"</h2>
                <p class="home__lede">
                    "Revolutionizing EV battery lifecycle management with blockchain technology"
                </p>
                <button class="home__button">"Learn More"</button>
            </section>

            <section class="home__band">
                <h2 class="home__section-title">"Key Features"</h2>
                <div class="home__grid home__grid--three">{features}</div>
            </section>

            <section class="home__plain">
                <h2 class="home__section-title">"Roles in the System"</h2>
                <div class="home__grid">{roles}</div>
            </section>

            <section class="home__band home__cta">
                <h2 class="home__headline">"Ready to Get Started?"</h2>
                <p class="home__lede">
                    "Join the revolution in EV battery management and contribute to a sustainable future."
                </p>
                <button class="home__button home__button--large">
                    "Join Now"
                    <IconGlyph icon=Icon::Zap class="home__button-icon"/>
                </button>
            </section>
        </div>
    }
}

fn feature_card(card: &LandingCard) -> impl IntoView {
    view! {
        <div class=card_class("feature-card", card)>
            <div class="feature-card__body">
                <IconGlyph icon=card.icon class="feature-card__icon"/>
                <h3 class="feature-card__title">{card.title}</h3>
                <p class="feature-card__text">{card.description}</p>
            </div>
        </div>
    }
}

fn role_card(card: &LandingCard) -> impl IntoView {
    view! {
        <div class=card_class("role-card", card)>
            <div class="role-card__body">
                <div class="role-card__heading">
                    <IconGlyph icon=card.icon class="role-card__icon"/>
                    <h3 class="role-card__title">{card.title}</h3>
                </div>
                <p class="role-card__text">{card.description}</p>
                <div class="role-card__footer">
                    <button class="role-card__more">
                        "Learn more"
                        <IconGlyph icon=Icon::ChevronRight class="role-card__chevron"/>
                    </button>
                </div>
            </div>
        </div>
    }
}
