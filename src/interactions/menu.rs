use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::Document;

use crate::dom::{self, Listener};

pub const MENU_ID: &str = "navMenu";
pub const TOGGLE_ID: &str = "mobileMenuToggle";

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click anywhere outside both the menu and its toggle closes it.
    pub fn handle_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if inside_menu || inside_toggle {
            return false;
        }
        self.close()
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.close()
        } else {
            false
        }
    }
}

pub type SharedMenu = Rc<RefCell<MobileMenu>>;

/// Mirrors the state onto the `active` class of the menu and its toggle.
pub fn apply(document: &Document, menu: &MobileMenu) {
    for id in [MENU_ID, TOGGLE_ID] {
        if let Some(element) = dom::by_id(document, id) {
            dom::set_class(&element, "active", menu.is_open());
        }
    }
}

pub fn close(menu: &SharedMenu) {
    menu.borrow_mut().close();
    if let Some(document) = dom::document() {
        apply(&document, &menu.borrow());
    }
}

pub fn install_menu(document: &Document, menu: SharedMenu) -> Vec<Listener> {
    let (Some(nav_menu), Some(toggle)) = (
        dom::by_id(document, MENU_ID),
        dom::by_id(document, TOGGLE_ID),
    ) else {
        debug!("No mobile menu on this page");
        return Vec::new();
    };

    let mut listeners = Vec::new();

    let on_toggle = {
        let menu = menu.clone();
        let document = document.clone();
        Listener::new(&toggle, "click", move |_| {
            let open = menu.borrow_mut().toggle();
            debug!("Mobile menu open: {}", open);
            apply(&document, &menu.borrow());
        })
    };
    listeners.extend(on_toggle);

    let on_outside_click = {
        let document_clone = document.clone();
        Listener::new(document, "click", move |event| {
            let inside_menu = dom::event_within(&event, &nav_menu);
            let inside_toggle = dom::event_within(&event, &toggle);
            if menu
                .borrow_mut()
                .handle_document_click(inside_menu, inside_toggle)
            {
                apply(&document_clone, &menu.borrow());
            }
        })
    };
    listeners.extend(on_outside_click);

    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.handle_document_click(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn clicks_on_menu_or_toggle_keep_it_open() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(!menu.handle_document_click(true, false));
        assert!(!menu.handle_document_click(false, true));
        assert!(menu.is_open());
    }

    #[test]
    fn escape_always_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(!menu.handle_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.handle_key("Escape"));
        assert!(!menu.is_open());
        // Already closed: still closed, nothing changed.
        assert!(!menu.handle_key("Escape"));
        assert!(!menu.is_open());
    }
}
