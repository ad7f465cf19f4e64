//! Small building blocks shared by the home page sections.

use leptos::prelude::*;

use crate::content::{Card, Stat};

/// Eyebrow, two-tone title, and optional intro paragraph.
#[component]
pub fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] highlight: &'static str,
    #[prop(optional)] intro: &'static str,
) -> impl IntoView {
    view! {
        <header class="section-header">
            <p class="section-eyebrow">{eyebrow}</p>
            <h2 class="section-title">
                {title}
                <Show when=move || !highlight.is_empty()>
                    " "
                    <span class="text-gradient">{highlight}</span>
                </Show>
            </h2>
            <Show when=move || !intro.is_empty()>
                <p class="section-intro">{intro}</p>
            </Show>
        </header>
    }
}

#[component]
pub fn Icon(name: &'static str) -> impl IntoView {
    view! { <span class=format!("icon icon-{name}") aria-hidden="true"></span> }
}

#[component]
pub fn InfoCard(card: Card) -> impl IntoView {
    view! {
        <article class="info-card">
            <div class="info-card-icon">
                <Icon name=card.icon/>
            </div>
            <h3 class="info-card-title">{card.title}</h3>
            <p class="info-card-text">{card.description}</p>
        </article>
    }
}

/// Grid of [`InfoCard`]s.
#[component]
pub fn CardGrid(cards: &'static [Card], #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("card-grid {class}")>
            {cards.iter().map(|card| view! { <InfoCard card=*card/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn StatGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <dl class="stat-grid">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat">
                            <dt class="stat-value">{stat.value}</dt>
                            <dd class="stat-label">{stat.label}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[component]
pub fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li>
                            <Icon name="check"/>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
