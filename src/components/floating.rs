use yew::prelude::*;

use crate::config;
use crate::widgets::visibility::use_scrolled_past;

#[function_component(StickyCta)]
pub fn sticky_cta() -> Html {
    let visible = use_scrolled_past(config::STICKY_CTA_SCROLL_THRESHOLD);

    if !visible {
        return html! {};
    }

    html! {
        <div class="sticky-cta">
            <a href={config::mailto()} class="sticky-cta-desktop">{"🏆 Get Free Audit"}</a>
            <a href={config::mailto()} class="sticky-cta-mobile" aria-label="Get Free Audit">{"🏆"}</a>
            <style>
                {r#"
                .sticky-cta {
                    position: fixed;
                    bottom: 1rem;
                    right: 1rem;
                    z-index: 50;
                    animation: slideUp 0.3s ease-out;
                }
                .sticky-cta a {
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                    color: white;
                    text-decoration: none;
                    font-weight: 600;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s;
                }
                .sticky-cta a:hover { transform: scale(1.05); }
                .sticky-cta-desktop { display: block; padding: 1rem 1.5rem; border-radius: 0.75rem; }
                .sticky-cta-mobile {
                    display: none;
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                @keyframes slideUp {
                    from { opacity: 0; transform: translateY(100px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .sticky-cta-desktop { display: none; }
                    .sticky-cta-mobile { display: flex; }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    html! {
        <div class="chat-widget">
            <div class="chat-toggle-wrap">
                <button class="chat-toggle" onclick={toggle} aria-label="Chat with us">{"💬"}</button>
                <span class="chat-badge">{"1"}</span>
            </div>
            if *is_open {
                <div class="chat-window">
                    <div class="chat-header">
                        <div>
                            <h3>{config::AGENCY_NAME}</h3>
                            <p>{"We're online now"}</p>
                        </div>
                        <button class="chat-close" onclick={close} aria-label="Close chat">{"✕"}</button>
                    </div>
                    <div class="chat-body">
                        <div class="chat-bubble">
                            {"Hi! 👋 How can we help grow your veterinary practice today?"}
                        </div>
                        <a class="chat-action" href={config::mailto()}>{"🏆 Get Free Google Maps Audit"}</a>
                        <a class="chat-action" href="#services">{"✉️ Ask About Our Services"}</a>
                        <a class="chat-action" href={config::emergency_tel()}>{"⏰ Emergency Marketing Support"}</a>
                    </div>
                </div>
            }
            <style>
                {r#"
                .chat-widget { position: fixed; bottom: 1rem; left: 1rem; z-index: 50; }
                .chat-toggle-wrap { position: relative; transition: transform 0.2s; }
                .chat-toggle-wrap:hover { transform: scale(1.1); }
                .chat-toggle {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                }
                .chat-badge {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 24px;
                    height: 24px;
                    border-radius: 50%;
                    background: #ef4444;
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .chat-window {
                    position: absolute;
                    bottom: 5rem;
                    left: 0;
                    width: 20rem;
                    background: white;
                    border-radius: 0.5rem;
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: popIn 0.2s ease-out;
                }
                .chat-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    color: white;
                    border-radius: 0.5rem 0.5rem 0 0;
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                }
                .chat-header p { font-size: 0.875rem; color: #dbeafe; }
                .chat-close { background: none; border: none; color: white; cursor: pointer; }
                .chat-body { padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
                .chat-bubble { background: #f1f5f9; border-radius: 0.5rem; padding: 0.75rem; font-size: 0.875rem; color: #334155; }
                .chat-action {
                    border: 1px solid #e2e8f0;
                    border-radius: 0.375rem;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    color: #334155;
                    text-decoration: none;
                }
                .chat-action:hover { background: #f8fafc; }
                "#}
            </style>
        </div>
    }
}
