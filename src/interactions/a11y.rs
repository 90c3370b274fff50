use log::debug;
use web_sys::{Document, Element};

use crate::config;
use crate::dom::{self, Listener};

const SKIP_LINK_STYLE: &str = "position: absolute; top: -40px; left: 0; \
    background: var(--meta-blue); color: white; padding: 8px; \
    text-decoration: none; z-index: 100;";

/// Label for a button without one: its trimmed text, or a 1-based
/// positional name when the button has no text.
pub fn aria_label(text: &str, index: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        format!("Button {}", index + 1)
    } else {
        text.to_string()
    }
}

/// The injected "Skip to main content" link. Removed again on drop.
pub struct SkipLink {
    link: Element,
    _listeners: Vec<Listener>,
}

impl Drop for SkipLink {
    fn drop(&mut self) {
        self.link.remove();
    }
}

pub fn install_skip_link(document: &Document) -> Option<SkipLink> {
    let body = document.body()?;
    let link = document.create_element("a").ok()?;
    let _ = link.set_attribute("href", config::MAIN_CONTENT_ANCHOR);
    link.set_text_content(Some("Skip to main content"));
    link.set_class_name("skip-link");
    let _ = link.set_attribute("style", SKIP_LINK_STYLE);

    let first = body.first_child();
    body.insert_before(&link, first.as_ref()).ok()?;

    let mut listeners = Vec::new();
    {
        let shown = link.clone();
        listeners.extend(Listener::new(&link, "focus", move |_| {
            dom::set_style(&shown, "top", "0");
        }));
    }
    {
        let hidden = link.clone();
        listeners.extend(Listener::new(&link, "blur", move |_| {
            dom::set_style(&hidden, "top", "-40px");
        }));
    }

    Some(SkipLink {
        link,
        _listeners: listeners,
    })
}

/// Gives every unlabeled button an `aria-label`.
pub fn label_buttons(document: &Document) {
    for (index, button) in dom::query_all(document, "button:not([aria-label])")
        .iter()
        .enumerate()
    {
        let text = button.text_content().unwrap_or_default();
        let label = aria_label(&text, index);
        debug!("aria-label {:?}", label);
        let _ = button.set_attribute("aria-label", &label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_trimmed_text() {
        assert_eq!(aria_label("  Get Started \n", 0), "Get Started");
    }

    #[test]
    fn empty_button_gets_positional_label() {
        assert_eq!(aria_label("   ", 0), "Button 1");
        assert_eq!(aria_label("", 4), "Button 5");
    }
}
