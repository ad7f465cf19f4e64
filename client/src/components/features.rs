//! Design framework, merger layer, and end-to-end workflow.

use leptos::prelude::*;

use crate::components::common::{CardGrid, CheckList, SectionHeader};
use crate::components::scene_host::{SceneHost, SceneKind};
use crate::content::sections::{DESIGN_LAYERS, MERGER_POINTS, WORKFLOW_FEATURES};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section section-features">
            <div class="container split">
                <div class="split-text">
                    <SectionHeader
                        eyebrow="Design & Measurement Framework"
                        title="Three-Layer"
                        highlight="Digital Design"
                        intro="Every project begins with a structured 3D digital design that becomes the single reference point for planning, execution, and monitoring."
                    />
                    <ol class="layer-list">
                        {DESIGN_LAYERS
                            .iter()
                            .enumerate()
                            .map(|(i, layer)| {
                                view! {
                                    <li class="layer">
                                        <span class="layer-index">{i + 1}</span>
                                        <div>
                                            <h3>{layer.title}</h3>
                                            <p>{layer.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
                <div class="split-visual">
                    <SceneHost kind=SceneKind::DataFlow/>
                </div>
            </div>

            <div class="container split split-reverse">
                <div class="split-visual">
                    <SceneHost kind=SceneKind::Merger/>
                </div>
                <div class="split-text">
                    <SectionHeader
                        eyebrow="Visualization"
                        title="The"
                        highlight="Merger Layer"
                        intro="Multiple Design layers are merged into a single visual view, making project status easy to understand at a glance."
                    />
                    <CheckList items=&MERGER_POINTS/>
                </div>
            </div>

            <div class="container">
                <SectionHeader eyebrow="Complete Workflow" title="End-to-End" highlight="Project Management"/>
                <CardGrid cards=&WORKFLOW_FEATURES class="card-grid-3"/>
            </div>
        </section>
    }
}
