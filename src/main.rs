use log::info;
use yew::prelude::*;

mod config;
mod content;
mod form {
    pub mod controller;
    pub mod delivery;
    pub mod hook;
    pub mod validation;
}
mod widgets {
    pub mod carousel;
    pub mod visibility;
}
mod components {
    pub mod floating;
    pub mod form_field;
    pub mod popup;
}
mod sections {
    pub mod contact;
    pub mod hero;
    pub mod lead_magnet;
    pub mod nav;
    pub mod people;
    pub mod showcase;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::AGENCY_NAME);
    yew::Renderer::<App>::new().render();
}
