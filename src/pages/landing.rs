use yew::prelude::*;

use crate::components::floating::{ChatWidget, StickyCta};
use crate::components::popup::PopupLeadMagnet;
use crate::sections::contact::{Contact, Footer};
use crate::sections::hero::Hero;
use crate::sections::lead_magnet::LeadMagnet;
use crate::sections::nav::Nav;
use crate::sections::people::{About, Testimonials};
use crate::sections::showcase::{CaseStudies, Resources, Services, TrustBadges};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
            <Nav />
            <main id="main-content">
                <Hero />
                <TrustBadges />
                <Services />
                <Testimonials />
                <CaseStudies />
                <Resources />
                <About />
                <LeadMagnet />
                <Contact />
            </main>
            <Footer />
            <StickyCta />
            <ChatWidget />
            <PopupLeadMagnet />
            <style>
                {r#"
                * { box-sizing: border-box; margin: 0; padding: 0; }
                html { scroll-behavior: smooth; }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1e293b;
                    background: white;
                }
                .skip-link {
                    position: absolute;
                    left: -9999px;
                }
                .skip-link:focus {
                    left: 1rem;
                    top: 1rem;
                    z-index: 70;
                    background: #2563eb;
                    color: white;
                    padding: 0.5rem 1rem;
                    border-radius: 0.375rem;
                }
                .container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
                .section { padding: 5rem 0; }
                .section.tinted { background: linear-gradient(135deg, #fef2f2, #eff6ff); }
                .section-header { text-align: center; margin-bottom: 4rem; }
                .section-header h2 { font-size: 2.25rem; font-weight: 700; color: #1e293b; margin-bottom: 1rem; }
                .section-header p { font-size: 1.25rem; color: #475569; max-width: 48rem; margin: 0 auto; }
                .section-header.light h2 { color: white; }
                .section-header.light p { color: #fee2e2; }

                .card-grid { display: grid; gap: 2rem; }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card-grid.four { grid-template-columns: repeat(4, 1fr); }
                @media (max-width: 1024px) {
                    .card-grid.three, .card-grid.four { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .card-grid.three, .card-grid.four { grid-template-columns: 1fr; }
                }

                .badge-card, .service-card, .case-card, .testimonial-card, .contact-card, .lead-card {
                    background: white;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 24px rgba(15, 23, 42, 0.08);
                }
                .badge-card { text-align: center; padding: 1.5rem; transition: transform 0.3s; }
                .badge-card:hover { transform: scale(1.05); }
                .badge-icon { font-size: 2rem; margin-bottom: 1rem; }
                .badge-card h3 { font-weight: 600; margin-bottom: 0.5rem; }
                .badge-card p { font-size: 0.875rem; color: #475569; }

                .service-card { padding: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
                .lift { transition: transform 0.2s, box-shadow 0.2s; }
                .lift:hover { transform: translateY(-5px) scale(1.03); box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15); }
                .card-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    background: linear-gradient(135deg, #ef4444, #3b82f6);
                }
                .service-card h3 { font-size: 1.25rem; font-weight: 600; }
                .service-card p { color: #475569; flex-grow: 1; }
                .service-footer { display: flex; justify-content: space-between; align-items: center; }
                .price { font-size: 1.125rem; font-weight: 600; color: #dc2626; }

                .outline-button {
                    border: 1px solid #ef4444;
                    color: #dc2626;
                    border-radius: 0.375rem;
                    padding: 0.375rem 0.75rem;
                    text-decoration: none;
                    text-align: center;
                }
                .outline-button:hover { background: #fef2f2; }
                .gradient-button {
                    display: inline-block;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.875rem 1.5rem;
                    font-size: 1rem;
                    font-weight: 600;
                    color: white;
                    text-align: center;
                    text-decoration: none;
                    cursor: pointer;
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                    transition: transform 0.3s, opacity 0.3s;
                }
                .gradient-button:hover:not(:disabled) { transform: scale(1.03); }
                .gradient-button:disabled { opacity: 0.5; cursor: not-allowed; }
                .wide { width: 100%; display: block; }
                .white-button {
                    display: inline-block;
                    background: white;
                    color: #2563eb;
                    padding: 0.875rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-decoration: none;
                }

                .case-card { overflow: hidden; }
                .case-card img { width: 100%; height: 12rem; object-fit: cover; transition: transform 0.3s; }
                .case-card:hover img { transform: scale(1.05); }
                .case-body { padding: 1.5rem; }
                .case-body h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
                .case-body h4 { font-weight: 600; margin: 0.75rem 0 0.25rem; }
                .case-body p { font-size: 0.875rem; color: #475569; }
                .case-body .problem { color: #dc2626; }
                .case-body .solution { color: #2563eb; }
                .case-body .results { color: #16a34a; }
                .case-body .results-text { font-weight: 500; }
                .case-body .gradient-button { width: 100%; margin-top: 1.5rem; }

                .testimonials, .contact { background: linear-gradient(135deg, #f8fafc, #eff6ff); }
                .testimonial-card { max-width: 48rem; margin: 0 auto; padding: 2rem; }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                .testimonial-author img { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }
                .testimonial-author p { font-size: 0.875rem; color: #475569; }
                .testimonial-comment { font-style: italic; color: #475569; line-height: 1.7; }
                .stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; }
                .star { color: #facc15; font-size: 1.25rem; }

                .expert-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #f8fafc, #eff6ff);
                    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.12);
                }
                .expert-photo { width: 14rem; height: 14rem; border-radius: 1rem; object-fit: cover; }
                .expert-info h3 { font-size: 1.875rem; font-weight: 700; }
                .expert-role { font-size: 1.25rem; color: #2563eb; font-weight: 600; margin-bottom: 1rem; }
                .specialties { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
                .specialty-badge { background: #dbeafe; color: #1d4ed8; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.875rem; }
                .expert-info blockquote { font-size: 1.125rem; font-style: italic; color: #475569; margin-bottom: 1.5rem; }
                .rating-row { display: flex; align-items: center; gap: 1rem; font-size: 0.875rem; color: #64748b; }
                .rating-row .stars { margin-bottom: 0; }
                @media (max-width: 1024px) {
                    .expert-card { flex-direction: column; text-align: center; }
                    .specialties, .rating-row { justify-content: center; }
                }

                .carousel-controls { display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 2rem; }
                .carousel-arrow {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 2px solid #3b82f6;
                    color: #3b82f6;
                    background: white;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .carousel-arrow:hover { background: #eff6ff; }
                .carousel-dots { display: flex; gap: 0.5rem; }
                .carousel-dot { width: 12px; height: 12px; border-radius: 50%; border: none; background: #cbd5e1; cursor: pointer; }
                .carousel-dot.active { background: #3b82f6; }

                .why-choose {
                    margin-top: 4rem;
                    border-radius: 1rem;
                    padding: 2rem;
                    color: white;
                    text-align: center;
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                }
                .why-choose h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                .why-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                @media (max-width: 768px) { .why-grid { grid-template-columns: 1fr; } }

                .lead-magnet { background: linear-gradient(135deg, #ef4444, #3b82f6); }
                .lead-card { max-width: 42rem; margin: 0 auto; padding: 2rem; }
                .lead-card form { display: flex; flex-direction: column; gap: 1.5rem; }
                .lead-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                @media (max-width: 768px) { .lead-grid { grid-template-columns: 1fr; } }
                .form-field label { display: block; font-size: 0.875rem; font-weight: 500; color: #334155; margin-bottom: 0.5rem; }
                .form-input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }
                .form-input:focus { outline: none; box-shadow: 0 0 0 2px #3b82f6; border-color: transparent; }
                .form-input.invalid { border-color: #ef4444; }
                .field-error { color: #ef4444; font-size: 0.875rem; margin-top: 0.25rem; }
                .form-error { color: #b91c1c; background: #fef2f2; border-radius: 0.5rem; padding: 0.75rem; font-size: 0.875rem; }
                .form-note { font-size: 0.875rem; color: #475569; text-align: center; }

                .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
                @media (max-width: 1024px) { .contact-grid { grid-template-columns: 1fr; } }
                .contact-card { padding: 2rem; display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-card h3 { font-size: 1.5rem; font-weight: 700; }
                .contact-side { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-tile {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    color: inherit;
                    transition: transform 0.3s;
                }
                .contact-tile:hover { transform: scale(1.02); }
                .contact-tile.blue { background: #eff6ff; }
                .contact-tile.green { background: #f0fdf4; }
                .contact-tile.purple { background: #faf5ff; }
                .tile-icon { font-size: 1.5rem; }
                .tile-title { font-weight: 600; }
                .emergency-hours, .book-card {
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    color: white;
                    background: linear-gradient(to right, #ef4444, #3b82f6);
                }
                .emergency-hours h4 { font-size: 1.125rem; font-weight: 700; margin-bottom: 0.5rem; }
                .small { font-size: 0.875rem; margin-top: 0.5rem; }
                .hours-row { display: flex; justify-content: space-between; padding: 0.75rem; border-radius: 0.5rem; background: #f8fafc; }
                .hours-day { font-weight: 500; }
                .book-card { text-align: center; padding: 2rem; border-radius: 1rem; }
                .book-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                .book-card p { margin-bottom: 1.5rem; color: #dbeafe; }

                .footer { background: #0f172a; color: white; padding: 4rem 0 2rem; }
                .footer-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                @media (max-width: 1024px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 640px) { .footer-grid { grid-template-columns: 1fr; } }
                .footer h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
                .footer ul { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
                .footer a, .footer p, .footer li { color: #cbd5e1; text-decoration: none; }
                .footer a:hover { color: white; }
                .footer-company { display: flex; flex-direction: column; gap: 1rem; }
                .footer .logo-top { color: #60a5fa; }
                .footer .logo-bottom { color: #f87171; }
                .footer-bottom {
                    border-top: 1px solid #334155;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                }
                .footer-legal { display: flex; gap: 1.5rem; }

                .fade-up { animation: fadeUp 0.6s ease-out both; }
                .fade-in-left { animation: fadeInLeft 0.8s ease-out both; }
                .fade-in-right { animation: fadeInRight 0.8s ease-out 0.3s both; }
                .slide-in { animation: fadeInRight 0.5s ease-out both; }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes fadeInLeft {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes fadeInRight {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                "#}
            </style>
        </div>
    }
}
