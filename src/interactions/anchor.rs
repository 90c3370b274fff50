use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::menu::{self, SharedMenu};
use crate::dom::{self, Listener};
use crate::viewport::reactor::{apply_highlight, SharedHighlight};

/// The fixed navbar would cover the section top, so land that much higher.
pub fn anchor_scroll_target(target_offset_top: f64, nav_height: f64) -> f64 {
    target_offset_top - nav_height
}

/// `"#features"` -> `"features"`. A bare `#` names nothing.
pub fn anchor_key(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|key| !key.is_empty())
}

fn scroll_to_anchor(document: &Document, key: &str) -> bool {
    let Some(window) = dom::window() else {
        return false;
    };
    let Some(target) = dom::by_id(document, key).and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return false;
    };
    let top = anchor_scroll_target(target.offset_top() as f64, dom::nav_height(document));
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn install_anchors(
    document: &Document,
    highlight: SharedHighlight,
    menu: SharedMenu,
) -> Vec<Listener> {
    dom::query_all(document, "a[href^=\"#\"]")
        .into_iter()
        .filter_map(|anchor| {
            let document = document.clone();
            let highlight = highlight.clone();
            let menu = menu.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            Listener::new(&anchor, "click", move |event| {
                event.prevent_default();
                let Some(key) = anchor_key(&href) else {
                    return;
                };
                if !scroll_to_anchor(&document, key) {
                    return;
                }
                highlight.borrow_mut().activate(key);
                apply_highlight(&document, &highlight.borrow());
                menu::close(&menu);
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_below_the_navbar() {
        assert_eq!(anchor_scroll_target(1200.0, 60.0), 1140.0);
        assert_eq!(anchor_scroll_target(1200.0, 0.0), 1200.0);
    }

    #[test]
    fn extracts_anchor_key() {
        assert_eq!(anchor_key("#stats"), Some("stats"));
        assert_eq!(anchor_key("#"), None);
        assert_eq!(anchor_key("/pricing"), None);
    }
}
