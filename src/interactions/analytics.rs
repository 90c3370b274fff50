//! Click analytics. Events only go to the console for now; there is no
//! telemetry backend behind this.

use log::info;
use serde::Serialize;
use web_sys::Document;

use crate::dom::{self, Listener};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(category: &str, action: &str, label: &str) -> Self {
        Self {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        }
    }

    pub fn button_click(text: &str) -> Self {
        Self::new("Button", "Click", text.trim())
    }

    pub fn summary(&self) -> String {
        format!("Analytics: {} - {} - {}", self.category, self.action, self.label)
    }
}

pub fn track_event(event: &AnalyticsEvent) {
    info!("{}", event.summary());
    if let Ok(payload) = serde_wasm_bindgen::to_value(event) {
        gloo_console::debug!("analytics event", payload);
    }
}

pub fn install_button_tracking(document: &Document) -> Vec<Listener> {
    dom::query_all(document, "button")
        .into_iter()
        .filter_map(|button| {
            let source = button.clone();
            Listener::new(&button, "click", move |_| {
                let text = source.text_content().unwrap_or_default();
                track_event(&AnalyticsEvent::button_click(&text));
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_is_trimmed_text() {
        let event = AnalyticsEvent::button_click("\n   Start Learning  ");
        assert_eq!(event.label, "Start Learning");
        assert_eq!(event.summary(), "Analytics: Button - Click - Start Learning");
    }

    #[test]
    fn serializes_as_flat_object() {
        let event = AnalyticsEvent::new("Nav", "Toggle", "menu");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "category": "Nav", "action": "Toggle", "label": "menu" })
        );
    }
}
