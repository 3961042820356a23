use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{NAV_ITEMS, OFFICE_HOURS, SERVICES};
use crate::sections::nav::Logo;
use crate::sections::showcase::SectionHeader;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <SectionHeader
                    title="Get in Touch"
                    subtitle="Ready to grow your practice? We're here to help your clinic be the first call pet owners make."
                />
                <div class="contact-grid">
                    <div class="contact-card fade-in-left">
                        <h3>{"Contact Information"}</h3>
                        <a class="contact-tile blue" href={config::emergency_tel()}>
                            <span class="tile-icon">{"📞"}</span>
                            <div>
                                <p class="tile-title">{"Phone"}</p>
                                <p>{config::CONTACT_PHONE_DISPLAY}</p>
                            </div>
                        </a>
                        <a class="contact-tile green" href={config::mailto()}>
                            <span class="tile-icon">{"✉️"}</span>
                            <div>
                                <p class="tile-title">{"Email"}</p>
                                <p>{config::CONTACT_EMAIL}</p>
                            </div>
                        </a>
                        <div class="contact-tile purple">
                            <span class="tile-icon">{"📍"}</span>
                            <div>
                                <p class="tile-title">{"Address"}</p>
                                <p>{"Nationwide Service"}</p>
                            </div>
                        </div>
                        <div class="emergency-hours">
                            <h4>{"Emergency Hours"}</h4>
                            <p>{"24/7 Marketing Support Available"}</p>
                            <p class="small">{"For urgent situations, call our emergency line immediately"}</p>
                        </div>
                    </div>

                    <div class="contact-side fade-in-right">
                        <div class="contact-card">
                            <h3>{"Office Hours"}</h3>
                            { for OFFICE_HOURS.iter().map(|schedule| html! {
                                <div class="hours-row">
                                    <span class="hours-day">{schedule.day}</span>
                                    <span>{schedule.hours}</span>
                                </div>
                            }) }
                        </div>
                        <div class="book-card">
                            <h3>{"Ready to Book?"}</h3>
                            <p>{"Schedule a strategy call today and give your practice the visibility it deserves."}</p>
                            <a href={config::emergency_tel()} class="white-button">{"Call Now"}</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-company">
                    <Logo />
                    <p>{"Your trusted partner in veterinary practice marketing. We're committed to helping veterinary practices dominate local search and grow their emergency patient base."}</p>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li><a href={item.href}>{item.title}</a></li>
                        }) }
                        <li><a href={config::emergency_tel()}>{"Emergency Care"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Our Services"}</h3>
                    <ul>
                        { for SERVICES.iter().take(5).map(|service| html! {
                            <li><a href="#services">{service.title}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact Info"}</h3>
                    <ul class="footer-contact">
                        <li>{format!("📞 {}", config::CONTACT_PHONE_DISPLAY)}</li>
                        <li>{format!("✉️ {}", config::CONTACT_EMAIL)}</li>
                        <li>{"📍 Nationwide Service"}</li>
                        <li>{"⏰ 24/7 Marketing Support"}</li>
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", current_year, config::AGENCY_NAME)}</p>
                <div class="footer-legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Accessibility"}</a>
                </div>
            </div>
        </footer>
    }
}
