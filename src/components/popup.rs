use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::config;
use crate::form::controller::SubmitOutcome;
use crate::form::delivery::{deliver_lead, LeadKind};
use crate::form::hook::use_form;
use crate::form::validation::Field;
use crate::sections::lead_magnet::SUBMIT_FAILED_MESSAGE;
use crate::widgets::visibility::use_shown_after;

const POPUP_FIELDS: &[Field] = &[Field::Name, Field::Email];

/// Lead form that pops up once, a few seconds after the page loads.
#[function_component(PopupLeadMagnet)]
pub fn popup_lead_magnet() -> Html {
    let visible = use_shown_after(config::POPUP_DELAY_MS);
    let form = use_form(POPUP_FIELDS);
    let submitting = form.is_submitting();

    let close = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    let onsubmit = {
        let form = form.clone();
        let visible = visible.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            let visible = visible.clone();
            spawn_local(async move {
                let outcome = form.submit(|values| deliver_lead(LeadKind::Guide, values)).await;
                if outcome == SubmitOutcome::Sent {
                    visible.set(false);
                }
            });
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="popup-backdrop">
            <div class="popup">
                <button class="popup-close" onclick={close} aria-label="Close">{"✕"}</button>
                <div class="popup-body">
                    <div class="popup-icon">{"🏆"}</div>
                    <h3>{"Get Your Free Google Maps Audit!"}</h3>
                    <p>{"\"Why You're Not Ranking #1 for Emergency Vet Services\" - A comprehensive audit every veterinary practice needs."}</p>
                    <form onsubmit={onsubmit} novalidate={true}>
                        <FormField
                            field={Field::Name}
                            placeholder="Your name"
                            value={form.value(Field::Name)}
                            error={form.error_message(Field::Name)}
                            oninput={form.bind(Field::Name)}
                        />
                        <FormField
                            field={Field::Email}
                            input_type="email"
                            placeholder="Your email address"
                            value={form.value(Field::Email)}
                            error={form.error_message(Field::Email)}
                            oninput={form.bind(Field::Email)}
                        />
                        <button type="submit" class="gradient-button wide" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Get My Free Google Maps Audit" } }
                        </button>
                        if form.has_submit_error() {
                            <p class="form-error" role="alert">{SUBMIT_FAILED_MESSAGE}</p>
                        }
                    </form>
                    <p class="popup-note">{"No spam, unsubscribe at any time."}</p>
                </div>
            </div>
            <style>
                {r#"
                .popup-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    animation: fadeIn 0.3s ease-out;
                }
                .popup {
                    position: relative;
                    background: white;
                    border-radius: 1rem;
                    max-width: 28rem;
                    width: 100%;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: popIn 0.3s ease-out;
                }
                .popup-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #64748b;
                    cursor: pointer;
                }
                .popup-body { padding: 2rem; text-align: center; }
                .popup-body form { text-align: left; display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem; }
                .popup-icon {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #ef4444, #3b82f6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .popup-body h3 { font-size: 1.5rem; font-weight: 700; color: #1e293b; margin-bottom: 0.5rem; }
                .popup-body p { color: #475569; }
                .popup-note { font-size: 0.75rem; margin-top: 1rem; }
                "#}
            </style>
        </div>
    }
}
