use log::Level;

pub const AGENCY_NAME: &str = "Urgent Vet Marketing";
pub const CONTACT_EMAIL: &str = "info@urgentvetmarketing.com";
pub const CONTACT_PHONE_DISPLAY: &str = "(555) 123-4567";
pub const EMERGENCY_LINE: &str = "+1234567890";

/// Scroll offset (px) after which the navigation bar gets its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Scroll offset (px) after which the sticky CTA buttons appear.
pub const STICKY_CTA_SCROLL_THRESHOLD: f64 = 300.0;
pub const POPUP_DELAY_MS: u32 = 5_000;
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_000;

// hero parallax: scroll 0..500 moves the background 0..150px
pub const HERO_PARALLAX_SCROLL: (f64, f64) = (0.0, 500.0);
pub const HERO_PARALLAX_OFFSET: (f64, f64) = (0.0, 150.0);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn emergency_tel() -> String {
    format!("tel:{}", EMERGENCY_LINE)
}
