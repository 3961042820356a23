use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::form::delivery::{deliver_lead, LeadKind};
use crate::form::hook::use_form;
use crate::form::validation::Field;

const LEAD_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Phone, Field::Practice];

pub const SUBMIT_FAILED_MESSAGE: &str =
    "We couldn't send your request. Please try again or email us directly.";

#[function_component(LeadMagnet)]
pub fn lead_magnet() -> Html {
    let form = use_form(LEAD_FIELDS);
    let submitting = form.is_submitting();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            spawn_local(async move {
                form.submit(|values| deliver_lead(LeadKind::Audit, values)).await;
            });
        })
    };

    html! {
        <section id="lead-magnet" class="section lead-magnet">
            <div class="container">
                <div class="section-header light fade-up">
                    <h2>{"Get Your Free Google Maps Audit"}</h2>
                    <p>{"Discover why you're not ranking #1 for emergency vet services in your area. Get our comprehensive audit and dominate local search."}</p>
                </div>
                <div class="lead-card fade-up">
                    <form onsubmit={onsubmit} novalidate={true}>
                        <div class="lead-grid">
                            <FormField
                                field={Field::Name}
                                label="Full Name"
                                required={true}
                                placeholder="Your full name"
                                value={form.value(Field::Name)}
                                error={form.error_message(Field::Name)}
                                oninput={form.bind(Field::Name)}
                            />
                            <FormField
                                field={Field::Email}
                                label="Email Address"
                                input_type="email"
                                required={true}
                                placeholder="your@email.com"
                                value={form.value(Field::Email)}
                                error={form.error_message(Field::Email)}
                                oninput={form.bind(Field::Email)}
                            />
                            <FormField
                                field={Field::Phone}
                                label="Phone Number"
                                input_type="tel"
                                placeholder="(555) 123-4567"
                                value={form.value(Field::Phone)}
                                error={form.error_message(Field::Phone)}
                                oninput={form.bind(Field::Phone)}
                            />
                            <FormField
                                field={Field::Practice}
                                label="Practice Name"
                                placeholder="Your veterinary practice"
                                value={form.value(Field::Practice)}
                                error={form.error_message(Field::Practice)}
                                oninput={form.bind(Field::Practice)}
                            />
                        </div>
                        <button type="submit" class="gradient-button wide" disabled={submitting}>
                            {"🏆 "}
                            { if submitting { "Submitting..." } else { "Get My Free Google Maps Audit" } }
                        </button>
                        if form.has_submit_error() {
                            <p class="form-error" role="alert">{SUBMIT_FAILED_MESSAGE}</p>
                        }
                        <p class="form-note">
                            {"* Required fields. We respect your privacy and will never share your information."}
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}
