use leptos::prelude::*;

use crate::components::common::{CardGrid, SectionHeader};
use crate::components::scene_host::{SceneHost, SceneKind};
use crate::content::sections::CHALLENGES;

#[component]
pub fn Challenges() -> impl IntoView {
    view! {
        <section id="challenges" class="section section-challenges">
            <div class="section-scene">
                <SceneHost kind=SceneKind::ChaosParticles/>
            </div>
            <div class="container">
                <SectionHeader
                    eyebrow="Present Challenges"
                    title="The Problem with"
                    highlight="Traditional Monitoring"
                    intro="Across construction projects of all types, it is difficult to track work progress clearly and on time. Information is scattered, and decision-making is delayed."
                />
                <CardGrid cards=&CHALLENGES class="card-grid-4"/>
                <blockquote class="challenge-quote">
                    "Relying only on site visits, paper reports, or isolated digital tools does not "
                    "provide a complete or reliable picture of progress."
                </blockquote>
            </div>
        </section>
    }
}
