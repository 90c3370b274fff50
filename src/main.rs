use yew::prelude::*;
use log::{debug, info, warn};
use stylist::GlobalStyle;

use rover_landing::behaviours::Behaviours;
use rover_landing::components::navbar::Navbar;
use rover_landing::config;
use rover_landing::pages::landing::Landing;
use rover_landing::theme::{self, THEME};

#[function_component]
fn App() -> Html {
    // Attach the page script once everything below has rendered.
    {
        use_effect_with_deps(
            move |_| {
                let behaviours = Behaviours::install();
                move || drop(behaviours)
            },
            (),
        );
    }

    html! {
        <>
            <Navbar />
            <Landing />
        </>
    }
}

fn mount_theme() {
    match GlobalStyle::new(theme::global_stylesheet(&THEME)) {
        Ok(_) => debug!("Theme tokens mounted"),
        Err(e) => warn!("Theme stylesheet rejected: {}", e),
    }
    if let Ok(tokens) = serde_json::to_string(&THEME) {
        debug!("Theme: {}", tokens);
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Rover landing page");
    info!("Primary color: {}", THEME.colors.brand.primary.hex);
    mount_theme();
    yew::Renderer::<App>::new().render();
}
