//! Enquiry form section.
//!
//! Submission runs in a spawned future; the status message it leaves behind
//! is cleared after [`STATUS_CLEAR_MS`](crate::state::enquiry::STATUS_CLEAR_MS).

use leptos::prelude::*;

use crate::components::common::{SectionHeader, StatGrid};
use crate::content::sections::ENQUIRY_STATS;
use crate::state::enquiry::{EnquiryState, Field, FormStatus, PROJECT_TYPES};

fn field_value(state: RwSignal<EnquiryState>, field: Field) -> impl Fn() -> String + Copy {
    move || state.with(|s| s.form.get(field).to_owned())
}

fn field_input(state: RwSignal<EnquiryState>, field: Field) -> impl Fn(leptos::ev::Event) + Copy {
    move |ev| state.update(|s| s.form.set(field, event_target_value(&ev)))
}

fn status_class(status: &FormStatus) -> &'static str {
    if status.is_success() { "form-status form-status-success" } else { "form-status form-status-error" }
}

#[cfg(feature = "hydrate")]
fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
}

#[component]
pub fn Enquiry() -> impl IntoView {
    let state = RwSignal::new(EnquiryState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(EnquiryState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::enquiry::GlooTransport;
            use crate::state::enquiry::submit_enquiry;
            use crate::util::timers::clear_status_later;

            let outcome = submit_enquiry(&form, &GlooTransport::default(), current_year()).await;
            if let Err(err) = &outcome {
                log::warn!("enquiry not sent: {err:?}");
            }
            if let Some(seq) = state.try_update(|s| s.finish(outcome)) {
                clear_status_later(state, seq);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    let submitting = move || state.with(|s| s.status.is_submitting());
    let status = move || state.with(|s| s.status.message().map(|m| (status_class(&s.status), m.to_owned())));

    view! {
        <section id="enquiry" class="section section-enquiry">
            <div class="container split">
                <div class="split-text">
                    <SectionHeader
                        eyebrow="Get in Touch"
                        title="Start Your"
                        highlight="Project"
                        intro="Ready to transform your infrastructure monitoring? Let us know about your project and we'll get back to you within 24 hours."
                    />
                    <div class="enquiry-info">
                        <h3>"Accurate Measurement, Clear Planning"</h3>
                        <p class="text-gradient">"Daily Accountability."</p>
                        <p>
                            "With role-based access for all stakeholders, 3D Bharat ensures transparent "
                            "construction monitoring across all your infrastructure projects."
                        </p>
                    </div>
                    <StatGrid stats=&ENQUIRY_STATS/>
                </div>

                <form class="enquiry-form" on:submit=on_submit novalidate>
                    <div class="form-row">
                        <label class="form-field">
                            <span>"Name *"</span>
                            <input
                                type="text"
                                name="name"
                                prop:value=field_value(state, Field::Name)
                                on:input=field_input(state, Field::Name)
                            />
                        </label>
                        <label class="form-field">
                            <span>"Email *"</span>
                            <input
                                type="email"
                                name="email"
                                prop:value=field_value(state, Field::Email)
                                on:input=field_input(state, Field::Email)
                            />
                        </label>
                    </div>
                    <label class="form-field">
                        <span>"Organization / Company"</span>
                        <input
                            type="text"
                            name="organization"
                            prop:value=field_value(state, Field::Organization)
                            on:input=field_input(state, Field::Organization)
                        />
                    </label>
                    <label class="form-field">
                        <span>"Project Type"</span>
                        <select
                            name="project_type"
                            prop:value=field_value(state, Field::ProjectType)
                            on:change=field_input(state, Field::ProjectType)
                        >
                            <option value="">"Select Project Type"</option>
                            {PROJECT_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Message *"</span>
                        <textarea
                            name="message"
                            rows="5"
                            prop:value=field_value(state, Field::Message)
                            on:input=field_input(state, Field::Message)
                        ></textarea>
                    </label>

                    {move || status().map(|(class, message)| view! { <p class=class role="status">{message}</p> })}

                    <button type="submit" class="btn-primary form-submit" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
