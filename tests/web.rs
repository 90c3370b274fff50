//! Browser tests for the DOM glue. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

use rover_landing::{counter, dom};
use rover_landing::interactions::menu::{self, MobileMenu};
use rover_landing::interactions::{a11y, keyboard, lazy, ripple};
use rover_landing::viewport::reactor;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn opacity(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("opacity")
        .unwrap()
}

fn active_links(doc: &Document) -> Vec<String> {
    dom::query_all(doc, ".nav-link.active")
        .iter()
        .filter_map(|link| link.get_attribute("href"))
        .collect()
}

#[wasm_bindgen_test]
fn skip_link_is_first_in_body_and_removed_on_drop() {
    let doc = document();
    let skip = a11y::install_skip_link(&doc).unwrap();
    let first = doc.body().unwrap().first_element_child().unwrap();
    assert_eq!(first.class_name(), "skip-link");
    assert_eq!(first.get_attribute("href").as_deref(), Some("#home"));
    assert_eq!(first.text_content().as_deref(), Some("Skip to main content"));
    drop(skip);
    assert!(doc.query_selector(".skip-link").unwrap().is_none());
}

#[wasm_bindgen_test]
fn unlabeled_buttons_get_aria_labels() {
    let root = mount(r#"<button id="t-a"> Go </button><button id="t-b" aria-label="kept">x</button>"#);
    a11y::label_buttons(&document());
    let a = document().get_element_by_id("t-a").unwrap();
    let b = document().get_element_by_id("t-b").unwrap();
    assert_eq!(a.get_attribute("aria-label").as_deref(), Some("Go"));
    assert_eq!(b.get_attribute("aria-label").as_deref(), Some("kept"));
    root.remove();
}

#[wasm_bindgen_test]
fn menu_toggles_and_closes_on_outside_click() {
    let root = mount(
        r#"<ul id="navMenu"><li>link</li></ul>
           <button id="mobileMenuToggle">menu</button>
           <p id="t-outside">elsewhere</p>"#,
    );
    let doc = document();
    let state = Rc::new(RefCell::new(MobileMenu::default()));
    let _listeners = menu::install_menu(&doc, state.clone());

    let nav_menu = doc.get_element_by_id("navMenu").unwrap();
    let toggle = doc.get_element_by_id("mobileMenuToggle").unwrap();

    click(&toggle);
    assert!(state.borrow().is_open());
    assert!(nav_menu.class_list().contains("active"));
    assert!(toggle.class_list().contains("active"));

    click(&nav_menu);
    assert!(state.borrow().is_open());

    click(&doc.get_element_by_id("t-outside").unwrap());
    assert!(!state.borrow().is_open());
    assert!(!nav_menu.class_list().contains("active"));
    assert!(!toggle.class_list().contains("active"));

    root.remove();
}

#[wasm_bindgen_test]
fn missing_menu_installs_nothing() {
    let state = Rc::new(RefCell::new(MobileMenu::default()));
    assert!(menu::install_menu(&document(), state).is_empty());
}

#[wasm_bindgen_test]
fn highlight_marks_only_matching_link() {
    let root = mount(
        r##"<a class="nav-link" href="#t-one">one</a>
            <a class="nav-link" href="#t-two">two</a>"##,
    );
    let doc = document();
    let highlight = reactor::new_highlight(&doc);
    highlight.borrow_mut().activate("t-two");
    reactor::apply_highlight(&doc, &highlight.borrow());

    assert_eq!(active_links(&doc), vec!["#t-two".to_string()]);
    root.remove();
}

#[wasm_bindgen_test]
fn deferred_image_gets_its_source() {
    let root = mount(r#"<img id="t-img" data-src="/static/images/pixel.png" />"#);
    let image = document().get_element_by_id("t-img").unwrap();
    lazy::load_image(&image);
    assert!(image.get_attribute("src").unwrap().ends_with("/static/images/pixel.png"));
    assert!(!image.has_attribute("data-src"));
    root.remove();
}

#[wasm_bindgen_test]
async fn ripple_is_removed_after_its_animation() {
    let root = mount(r#"<button id="t-btn" class="btn-primary">Go</button>"#);
    let doc = document();
    let _listeners = ripple::install_ripples(&doc);
    let button = doc.get_element_by_id("t-btn").unwrap();

    click(&button);
    assert!(button.query_selector(".ripple").unwrap().is_some());

    TimeoutFuture::new(650).await;
    assert!(button.query_selector(".ripple").unwrap().is_none());
    root.remove();
}

#[wasm_bindgen_test]
fn escape_closes_open_menu() {
    let root = mount(
        r#"<ul id="navMenu"><li>link</li></ul>
           <button id="mobileMenuToggle">menu</button>"#,
    );
    let doc = document();
    let state = Rc::new(RefCell::new(MobileMenu::default()));
    let _keyboard = keyboard::install_keyboard(&doc, state.clone());

    state.borrow_mut().toggle();
    menu::apply(&doc, &state.borrow());
    let nav_menu = doc.get_element_by_id("navMenu").unwrap();
    assert!(nav_menu.class_list().contains("active"));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&event).unwrap();

    assert!(!state.borrow().is_open());
    assert!(!nav_menu.class_list().contains("active"));
    assert!(!doc.get_element_by_id("mobileMenuToggle").unwrap().class_list().contains("active"));
    root.remove();
}

#[wasm_bindgen_test]
fn scroll_outside_every_section_clears_highlight() {
    let root = mount(
        r##"<a class="nav-link" href="#t-far">far</a>
            <a class="nav-link" href="#t-farther">farther</a>
            <section id="t-far" style="position:absolute;top:20000px;height:100px"></section>
            <section id="t-farther" style="position:absolute;top:20100px;height:100px"></section>"##,
    );
    let doc = document();
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);

    let highlight = reactor::new_highlight(&doc);
    highlight.borrow_mut().activate("t-far");
    reactor::apply_highlight(&doc, &highlight.borrow());
    assert_eq!(active_links(&doc), vec!["#t-far".to_string()]);

    reactor::on_scroll(&highlight);
    assert!(active_links(&doc).is_empty());
    assert_eq!(highlight.borrow().active(), None);
    root.remove();
}

#[wasm_bindgen_test]
fn counter_without_numeric_target_keeps_its_text() {
    let root = mount(
        r#"<div id="t-text" class="stat-value" data-target="lots">99+</div>
           <div id="t-empty" class="stat-value" data-target="n/a"></div>"#,
    );
    let doc = document();
    let with_text = doc.get_element_by_id("t-text").unwrap();
    let empty = doc.get_element_by_id("t-empty").unwrap();

    counter::start(with_text.clone());
    counter::start(empty.clone());

    assert_eq!(with_text.text_content().as_deref(), Some("99+"));
    assert_eq!(empty.text_content().as_deref(), Some("0"));
    root.remove();
}

#[wasm_bindgen_test]
async fn counter_reaches_its_target() {
    let root = mount(r#"<div id="t-count" class="stat-value" data-target="42">0</div>"#);
    let stat = document().get_element_by_id("t-count").unwrap();
    counter::start(stat.clone());

    TimeoutFuture::new(2_300).await;
    assert_eq!(stat.text_content().as_deref(), Some("42"));
    root.remove();
}

#[wasm_bindgen_test]
async fn card_is_revealed_once_and_stays_visible() {
    let root = mount(
        r#"<div id="t-card" class="feature-card"
                style="position:fixed;top:0;left:0;width:200px;height:200px">card</div>"#,
    );
    let doc = document();
    let card = doc.get_element_by_id("t-card").unwrap();
    let _observer = reactor::install_reveal(&doc);
    assert_eq!(opacity(&card), "0");

    TimeoutFuture::new(500).await;
    assert_eq!(opacity(&card), "1");

    // Leaving and re-entering the viewport does not hide it again.
    dom::set_style(&card, "top", "30000px");
    TimeoutFuture::new(200).await;
    dom::set_style(&card, "top", "0");
    TimeoutFuture::new(200).await;
    assert_eq!(opacity(&card), "1");
    root.remove();
}
