use web_sys::Document;

use crate::dom::{self, Listener};

pub const LIFTED: &str = "translateY(-8px) scale(1.02)";
pub const RESTING: &str = "translateY(0) scale(1)";

/// Template cards lift slightly under the pointer.
pub fn install_card_hover(document: &Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for card in dom::query_all(document, ".template-card") {
        for (event, transform) in [("mouseenter", LIFTED), ("mouseleave", RESTING)] {
            let target = card.clone();
            listeners.extend(Listener::new(&card, event, move |_| {
                dom::set_style(&target, "transform", transform);
            }));
        }
    }
    listeners
}
