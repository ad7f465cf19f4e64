use leptos::prelude::*;

use crate::components::common::{Icon, StatGrid};
use crate::components::scene_host::{SceneHost, SceneKind};
use crate::content::sections::{COVERAGE_STATS, FOOTER_LINK_GROUPS, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="/#home" class="navbar-brand">
                        <span class="brand-mark">"3D"</span>
                        <span class="brand-name">"Bharat"</span>
                    </a>
                    <p>"Universal construction monitoring platform for planning, measurement, and execution."</p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|name| {
                                view! {
                                    <a href="#" class="footer-social-link" aria-label=*name>
                                        <Icon name=social_icon(name)/>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {FOOTER_LINK_GROUPS
                    .iter()
                    .map(|(heading, links)| {
                        view! {
                            <nav class="footer-links">
                                <h4>{*heading}</h4>
                                <ul>
                                    {links.iter().map(|l| view! { <li><a href="#">{*l}</a></li> }).collect_view()}
                                </ul>
                            </nav>
                        }
                    })
                    .collect_view()}

                <div class="footer-coverage">
                    <div class="footer-globe">
                        <SceneHost kind=SceneKind::Globe/>
                    </div>
                    <h4>"Nationwide Coverage"</h4>
                    <StatGrid stats=&COVERAGE_STATS/>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>"© 2026 3D Bharat. All Rights Reserved."</p>
                <div class="footer-legal">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}

fn social_icon(name: &str) -> &'static str {
    match name {
        "LinkedIn" => "linkedin",
        "Twitter" => "twitter",
        _ => "github",
    }
}
