use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::config;
use crate::dom::{self, Listener};

const RIPPLE_BUTTONS: &str = ".btn-primary, .btn-secondary, .btn-outline, .btn-large";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A circle as wide as the button's larger side, centred on the click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl RippleGeometry {
    pub fn from_click(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            x: client_x - button.left - size / 2.0,
            y: client_y - button.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
             transform: scale(0); animation: ripple 0.6s ease-out; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

fn spawn_ripple(document: &Document, button: &Element, event: &MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::from_click(
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        event.client_x() as f64,
        event.client_y() as f64,
    );

    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    ripple.set_class_name("ripple");
    let _ = ripple.set_attribute("style", &geometry.style());

    dom::set_style(button, "position", "relative");
    dom::set_style(button, "overflow", "hidden");
    if button.append_child(&ripple).is_err() {
        return;
    }

    Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
}

pub fn install_ripples(document: &Document) -> Vec<Listener> {
    dom::query_all(document, RIPPLE_BUTTONS)
        .into_iter()
        .filter_map(|button| {
            let document = document.clone();
            let target = button.clone();
            Listener::new(&target, "click", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    spawn_ripple(&document, &button, mouse);
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 160.0,
        height: 48.0,
    };

    #[test]
    fn sized_to_the_larger_side() {
        let g = RippleGeometry::from_click(BUTTON, 180.0, 74.0);
        assert_eq!(g.size, 160.0);
    }

    #[test]
    fn centred_on_click_point() {
        let g = RippleGeometry::from_click(BUTTON, 180.0, 74.0);
        // 180 - 100 - 80, 74 - 50 - 80
        assert_eq!(g.x, 0.0);
        assert_eq!(g.y, -56.0);
    }

    #[test]
    fn style_uses_ripple_keyframes() {
        let style = RippleGeometry { size: 40.0, x: 2.0, y: -3.5 }.style();
        assert!(style.starts_with("width: 40px; height: 40px; left: 2px; top: -3.5px;"));
        assert!(style.contains("animation: ripple 0.6s ease-out;"));
        assert!(style.contains("pointer-events: none;"));
    }
}
