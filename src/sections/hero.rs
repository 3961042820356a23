use yew::prelude::*;

use crate::config;
use crate::widgets::visibility::{map_range, use_window_scroll_y};

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_y = use_window_scroll_y();
    let parallax = map_range(
        scroll_y,
        config::HERO_PARALLAX_SCROLL,
        config::HERO_PARALLAX_OFFSET,
    );

    html! {
        <section id="home" class="hero">
            <div class="hero-parallax" style={format!("transform: translateY({}px);", parallax)}>
                <img
                    src="https://images.unsplash.com/photo-1601758228041-f3b2795255f1?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80"
                    alt="Happy pets"
                />
            </div>
            <div class="hero-grid">
                <div class="hero-copy fade-in-left">
                    <h1>
                        {"Pet owners don't scroll "}
                        <span class="gradient-text">{"during an emergency"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"If you're not in the top 3 on Google Maps, you don't get the call. We help veterinary practices dominate local search during emergencies."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={config::mailto()} class="hero-cta">{"🏆 Get Free Audit"}</a>
                        <a href="#case-studies" class="hero-cta-outline">{"View Case Studies"}</a>
                    </div>
                </div>
                <div class="hero-image fade-in-right">
                    <img
                        src="https://images.unsplash.com/photo-1548199973-03cce0bbc87b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80"
                        alt="Professional veterinarian examining a happy golden retriever dog in a modern veterinary clinic"
                    />
                    <div class="hero-card">
                        <span class="hero-card-icon">{"❤️"}</span>
                        <div>
                            <p class="hero-card-title">{"24/7 Care"}</p>
                            <p class="hero-card-text">{"Always here for you"}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #eff6ff, #ffffff, #f0fdf4);
                    padding: 6rem 1rem 4rem;
                }
                .hero-parallax {
                    position: absolute;
                    inset: 0;
                    will-change: transform;
                }
                .hero-parallax img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.2;
                }
                .hero-grid {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #1e293b;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .gradient-text {
                    background: linear-gradient(to right, #dc2626, #2563eb);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #475569;
                    max-width: 32rem;
                    margin-bottom: 2rem;
                }
                .hero-cta-group { display: flex; gap: 1rem; flex-wrap: wrap; }
                .hero-cta, .hero-cta-outline {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .hero-cta {
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                    color: white;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.2);
                }
                .hero-cta-outline {
                    background: white;
                    border: 2px solid #ef4444;
                    color: #dc2626;
                }
                .hero-cta:hover, .hero-cta-outline:hover { transform: scale(1.05); }
                .hero-image { position: relative; }
                .hero-image img {
                    width: 100%;
                    max-width: 32rem;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-card {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    background: white;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                    animation: popIn 0.6s ease-out 1s both;
                }
                .hero-card-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #dcfce7;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-card-title { font-weight: 600; color: #1e293b; }
                .hero-card-text { font-size: 0.875rem; color: #475569; }
                @keyframes popIn {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (max-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr; text-align: center; }
                    .hero-copy h1 { font-size: 2.5rem; }
                    .hero-cta-group { justify-content: center; }
                }
                "#}
            </style>
        </section>
    }
}
