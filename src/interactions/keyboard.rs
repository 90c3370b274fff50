use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::menu::{self, SharedMenu};
use crate::dom::{self, Listener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Direction::Next),
            "ArrowUp" => Some(Direction::Previous),
            _ => None,
        }
    }
}

/// The first section whose top edge sits in the upper half of the viewport.
/// `tops` are viewport-relative, in document order.
pub fn current_section(tops: &[f64], viewport_height: f64) -> Option<usize> {
    tops.iter()
        .position(|&top| top >= 0.0 && top < viewport_height / 2.0)
}

/// Neighbouring section index, or `None` at either end.
pub fn jump_target(current: usize, len: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next if current + 1 < len => Some(current + 1),
        Direction::Previous if current > 0 && current < len => Some(current - 1),
        _ => None,
    }
}

fn jump(document: &Document, event: &KeyboardEvent, direction: Direction) {
    let Some(window) = dom::window() else {
        return;
    };
    let sections = dom::query_all(document, "section[id]");
    let tops: Vec<f64> = sections
        .iter()
        .map(|section| section.get_bounding_client_rect().top())
        .collect();

    let target = current_section(&tops, dom::viewport_height(&window))
        .and_then(|current| jump_target(current, sections.len(), direction));

    if let Some(target) = target {
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        sections[target].scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn install_keyboard(document: &Document, menu: SharedMenu) -> Option<Listener> {
    let doc = document.clone();
    Listener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        if key == "Escape" {
            menu.borrow_mut().handle_key(&key);
            menu::apply(&doc, &menu.borrow());
        }
        if let Some(direction) = Direction::from_key(&key) {
            jump(&doc, event, direction);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("PageDown"), None);
    }

    #[test]
    fn current_is_first_top_in_upper_half() {
        // viewport 800: upper half is [0, 400)
        let tops = [-900.0, -100.0, 120.0, 900.0];
        assert_eq!(current_section(&tops, 800.0), Some(2));
    }

    #[test]
    fn no_current_when_no_top_in_upper_half() {
        assert_eq!(current_section(&[-300.0, 500.0], 800.0), None);
        assert_eq!(current_section(&[], 800.0), None);
    }

    #[test]
    fn up_from_first_does_nothing() {
        assert_eq!(jump_target(0, 4, Direction::Previous), None);
    }

    #[test]
    fn down_from_last_does_nothing() {
        assert_eq!(jump_target(3, 4, Direction::Next), None);
    }

    #[test]
    fn moves_exactly_one_section() {
        assert_eq!(jump_target(1, 4, Direction::Next), Some(2));
        assert_eq!(jump_target(1, 4, Direction::Previous), Some(0));
    }
}
