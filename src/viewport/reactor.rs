use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{active_section, hero_parallax, navbar_scrolled, orb_offset, reveal_delay_ms};
use super::{NavHighlight, RevealTracker, SectionBounds};
use crate::config;
use crate::dom::{self, Listener};
use crate::observer::{ObserverOptions, OneShotObserver};

pub type SharedHighlight = Rc<RefCell<NavHighlight>>;

const REVEAL_SELECTOR: &str = ".feature-card, .template-card, .stat-card, .achievement-card";
const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// `(key, link)` for every `.nav-link` pointing at an in-page anchor.
pub fn nav_links(document: &Document) -> Vec<(String, Element)> {
    dom::query_all(document, ".nav-link")
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            let key = href.strip_prefix('#')?.to_string();
            Some((key, link))
        })
        .collect()
}

pub fn new_highlight(document: &Document) -> SharedHighlight {
    let keys = nav_links(document).into_iter().map(|(key, _)| key);
    Rc::new(RefCell::new(NavHighlight::new(keys)))
}

/// Geometry is read fresh on every call.
pub fn read_sections(document: &Document) -> Vec<SectionBounds> {
    dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|section| {
            let key = section.id();
            let section = section.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds::new(
                key,
                section.offset_top() as f64,
                section.offset_height() as f64,
            ))
        })
        .collect()
}

/// Writes the highlight state back onto the `.nav-link` classes.
pub fn apply_highlight(document: &Document, highlight: &NavHighlight) {
    for (key, link) in nav_links(document) {
        dom::set_class(&link, "active", highlight.is_active(&key));
    }
}

fn update_active_section(document: &Document, scroll_offset: f64, highlight: &SharedHighlight) {
    let sections = read_sections(document);
    if sections.is_empty() {
        return;
    }
    let nav_height = dom::nav_height(document);
    let key = active_section(scroll_offset, nav_height, &sections);
    if highlight.borrow_mut().sync(key) {
        debug!("Active section: {:?}", key);
        apply_highlight(document, &highlight.borrow());
    }
}

fn update_navbar(document: &Document, scroll_offset: f64) {
    if let Some(navbar) = dom::by_id(document, "navbar") {
        dom::set_class(&navbar, "scrolled", navbar_scrolled(scroll_offset));
    }
}

fn update_parallax(document: &Document, scroll_offset: f64) {
    let parallax = hero_parallax(scroll_offset);
    if let Some(content) = dom::query(document, ".hero-content") {
        dom::set_style(
            &content,
            "transform",
            &format!("translateY({}px)", parallax.content_offset),
        );
        dom::set_style(&content, "opacity", &parallax.content_opacity.to_string());
    }
    if let Some(visual) = dom::query(document, ".hero-visual") {
        dom::set_style(
            &visual,
            "transform",
            &format!("translateY({}px)", parallax.visual_offset),
        );
    }
    for (index, orb) in dom::query_all(document, ".gradient-orb").iter().enumerate() {
        let (x, y) = orb_offset(index, scroll_offset);
        dom::set_style(orb, "transform", &format!("translate({}px, {}px)", x, y));
    }
}

/// One pass of everything that follows the scroll position.
pub fn on_scroll(highlight: &SharedHighlight) {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let scroll_offset = dom::scroll_offset(&window);
    update_navbar(&document, scroll_offset);
    update_active_section(&document, scroll_offset, highlight);
    update_parallax(&document, scroll_offset);
}

pub fn install_scroll_reactor(highlight: SharedHighlight) -> Option<Listener> {
    let window = dom::window()?;
    // Initial check so a reload halfway down the page highlights right away.
    on_scroll(&highlight);
    Listener::new(&window, "scroll", move |_| on_scroll(&highlight))
}

/// Hides the cards and fades each one in the first time it scrolls into view.
pub fn install_reveal(document: &Document) -> Option<OneShotObserver> {
    let cards = dom::query_all(document, REVEAL_SELECTOR);
    if cards.is_empty() {
        debug!("No cards to reveal");
        return None;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let options = ObserverOptions {
        threshold: config::REVEAL_THRESHOLD,
        root_margin: config::REVEAL_ROOT_MARGIN,
    };

    let observer = {
        let tracker = tracker.clone();
        OneShotObserver::new(options, move |card, batch_index| {
            let id = card
                .get_attribute(REVEAL_ID_ATTR)
                .and_then(|id| id.parse::<usize>().ok());
            let Some(id) = id else {
                return;
            };
            if !tracker.borrow_mut().reveal(id) {
                return;
            }
            Timeout::new(reveal_delay_ms(batch_index), move || {
                dom::set_style(&card, "opacity", "1");
                dom::set_style(&card, "transform", "translateY(0)");
            })
            .forget();
        })?
    };

    for (id, card) in cards.iter().enumerate() {
        let _ = card.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        dom::set_style(card, "opacity", "0");
        dom::set_style(
            card,
            "transform",
            &format!("translateY({}px)", config::REVEAL_OFFSET_PX),
        );
        dom::set_style(card, "transition", "opacity 0.6s ease, transform 0.6s ease");
        tracker.borrow_mut().register(id);
        observer.observe(card);
    }

    Some(observer)
}
