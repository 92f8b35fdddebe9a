//! Passport detail card.

use leptos::prelude::*;
use passport::{Icon, PassportRecord};

use crate::components::icon::IconGlyph;
use crate::util::passport_layout::{CUSTODY_TITLE, InfoSection, PassportLayout, TRACEABILITY_BADGE, TimelineEntry};

/// Render a record as the "Marklytics Battery Passport" card.
#[component]
pub fn PassportView(record: PassportRecord) -> impl IntoView {
    let layout = PassportLayout::from_record(&record);
    let sections = layout.sections.into_iter().map(section_view).collect_view();
    let timeline = layout.timeline.into_iter().map(timeline_entry_view).collect_view();

    view! {
        <article class="passport-card">
            <header class="passport-card__header">
                <div class="passport-card__kicker">
                    <span class="passport-card__dot"></span>
                    <h1>"EV BATTERY"</h1>
                </div>
                <h2 class="passport-card__title">
                    <span class="passport-card__brand">"Marklytics"</span>
                    " Battery Passport"
                </h2>
            </header>

            <div class="passport-card__identity">
                <p class="passport-card__id">
                    <span class="passport-card__id-label">"Battery ID:"</span>
                    " "
                    {layout.id}
                </p>
                <div class="passport-card__badge">
                    <IconGlyph icon=Icon::Battery class="passport-card__badge-icon"/>
                    <span class="passport-card__pill">{layout.weight}</span>
                </div>
                <div class="passport-card__badge">
                    <IconGlyph icon=Icon::Truck class="passport-card__badge-icon"/>
                    <span class="passport-card__pill">{TRACEABILITY_BADGE}</span>
                </div>
            </div>

            {sections}

            <section class="passport-card__section">
                <h3 class="passport-card__section-title">{CUSTODY_TITLE}</h3>
                <div class="timeline">
                    <IconGlyph icon=Icon::Truck class="timeline__icon"/>
                    <ol class="timeline__rail">{timeline}</ol>
                </div>
            </section>

            <p class="passport-card__footnote">"Digital Product passport by Marklytics"</p>
        </article>
    }
}

fn section_view(section: InfoSection) -> impl IntoView {
    let entries = section
        .entries
        .into_iter()
        .map(|entry| {
            view! {
                <div class="info-field">
                    <IconGlyph icon=entry.icon class="info-field__icon"/>
                    <div>
                        <p class="info-field__label">{entry.label}</p>
                        <p class="info-field__value">{entry.value}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="passport-card__section">
            <h3 class="passport-card__section-title">{section.title}</h3>
            <div class="passport-card__grid">{entries}</div>
        </section>
    }
}

fn timeline_entry_view(entry: TimelineEntry) -> impl IntoView {
    view! {
        <li class="timeline__entry">
            <span class="timeline__marker"></span>
            <p class="timeline__date">{entry.date}</p>
            <p class="timeline__event">{entry.event}</p>
        </li>
    }
}
