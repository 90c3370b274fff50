use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config;
use crate::dom::{self, Listener};

fn dismiss(document: &Document) {
    let Some(preloader) = dom::query(document, ".preloader") else {
        return;
    };
    dom::set_style(&preloader, "opacity", "0");
    Timeout::new(config::PRELOADER_FADE_MS, move || {
        dom::set_style(&preloader, "display", "none");
    })
    .forget();
}

/// Fades the preloader out once the page has loaded. The wasm bundle often
/// starts after `load` already fired, in which case it goes right away.
pub fn install_preloader(document: &Document) -> Option<Listener> {
    if document.ready_state() == "complete" {
        dismiss(document);
        return None;
    }
    let window = dom::window()?;
    let document = document.clone();
    Listener::new(&window, "load", move |_| dismiss(&document))
}
