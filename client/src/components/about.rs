use leptos::prelude::*;

use crate::components::common::{CardGrid, CheckList, SectionHeader};
use crate::components::scene_host::{SceneHost, SceneKind};
use crate::content::sections::{ABOUT_FEATURES, ABOUT_USE_CASES};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section-about">
            <div class="container split">
                <div class="split-text">
                    <SectionHeader eyebrow="About the Platform" title="What is" highlight="3D Bharat?"/>
                    <p class="section-body">
                        "3D Bharat converts drone photographs into .PLY point-cloud files that can be "
                        "explored directly in the browser, giving every stakeholder an accurate, "
                        "measurable model of the site."
                    </p>
                    <p class="section-body">
                        "Each survey is compared against planned targets, so progress monitoring is "
                        "based on what was actually built rather than on reports about it."
                    </p>
                    <CheckList items=&ABOUT_FEATURES/>
                </div>
                <div class="split-visual globe-frame">
                    <SceneHost kind=SceneKind::Globe/>
                </div>
            </div>
            <div class="container">
                <CardGrid cards=&ABOUT_USE_CASES class="card-grid-2"/>
            </div>
        </section>
    }
}
