use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::NAV_ITEMS;
use crate::widgets::visibility::use_scrolled_past;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <a href="#home" class="nav-logo">
            <span class="logo-mark">{"🐾"}</span>
            <span class="logo-text">
                <span class="logo-top">{"URGENT VET"}</span>
                <span class="logo-bottom">{"MARKETING"}</span>
            </span>
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::NAV_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // anchor links still navigate, the menu just closes behind them
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Logo />

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Open navigation menu"
                    aria-expanded={(*menu_open).to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={item.href} class="nav-link" onclick={close_menu.clone()}>
                            {item.title}
                        </a>
                    }) }
                    <a href={config::mailto()} class="nav-cta" onclick={close_menu.clone()}>
                        {"Get Free Audit"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                    animation: navSlideIn 0.6s ease-out;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 16px rgba(15, 23, 42, 0.1);
                    border-bottom: 1px solid #dbeafe;
                }
                @keyframes navSlideIn {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    transition: transform 0.2s;
                }
                .nav-logo:hover { transform: scale(1.05); }
                .logo-mark {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #ef4444;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .logo-text { display: flex; flex-direction: column; line-height: 1.1; }
                .logo-top { font-size: 1.25rem; font-weight: 700; color: #2563eb; }
                .logo-bottom { font-size: 1.25rem; font-weight: 700; color: #ef4444; }
                .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                .nav-link {
                    color: #334155;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #2563eb; }
                .nav-cta {
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                    color: white;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #334155;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1.5rem;
                        background: white;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}
