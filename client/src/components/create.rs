use leptos::prelude::*;

use crate::components::common::{CardGrid, SectionHeader, StatGrid};
use crate::content::sections::{CREATE_BACKGROUND, CREATE_STATS, TABLET_FEATURES};

#[component]
pub fn Create() -> impl IntoView {
    view! {
        <section id="create" class="section section-create">
            <div class="section-backdrop" style=format!("background-image: url('{CREATE_BACKGROUND}')")></div>
            <div class="container">
                <SectionHeader
                    eyebrow="Data Collection & Monitoring"
                    title="Capture. Upload."
                    highlight="Monitor."
                    intro="From tablet-based field entries to web-based drone uploads, our platform provides same-day visibility of actual work across all your construction projects."
                />
                <StatGrid stats=&CREATE_STATS/>
                <CardGrid cards=&TABLET_FEATURES class="card-grid-4"/>

                <div class="authority-panel">
                    <p class="section-eyebrow">"For Authorities"</p>
                    <h3>"Periodic Web-Based Monitoring"</h3>
                    <p>
                        "View targets versus periodic progress, access reports and dashboards on web or "
                        "tablet, and monitor multiple projects without frequent site visits."
                    </p>
                    <div class="authority-actions">
                        <a href="#enquiry" class="btn-primary">"Request Demo"</a>
                        <a href="#about" class="btn-outline">"View Documentation"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
