use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use crate::counter;
use crate::dom::{self, Listener};
use crate::interactions::{a11y, analytics, anchor, cards, keyboard, lazy, menu, preloader, ripple};
use crate::interactions::a11y::SkipLink;
use crate::interactions::menu::MobileMenu;
use crate::observer::OneShotObserver;
use crate::viewport::reactor;

/// Every listener, observer and injected node the page script owns.
/// Dropping it detaches all of them.
#[derive(Default)]
pub struct Behaviours {
    listeners: Vec<Listener>,
    observers: Vec<OneShotObserver>,
    skip_link: Option<SkipLink>,
}

impl Behaviours {
    /// Attaches to whatever the rendered page contains. Pieces whose
    /// elements are missing are skipped.
    pub fn install() -> Self {
        let mut behaviours = Behaviours::default();
        let Some(document) = dom::document() else {
            debug!("No document, nothing to attach");
            return behaviours;
        };

        behaviours.skip_link = a11y::install_skip_link(&document);
        a11y::label_buttons(&document);

        let highlight = reactor::new_highlight(&document);
        let menu = Rc::new(RefCell::new(MobileMenu::default()));

        behaviours
            .listeners
            .extend(anchor::install_anchors(&document, highlight.clone(), menu.clone()));
        behaviours
            .listeners
            .extend(reactor::install_scroll_reactor(highlight));
        behaviours
            .listeners
            .extend(menu::install_menu(&document, menu.clone()));
        behaviours
            .listeners
            .extend(keyboard::install_keyboard(&document, menu));
        behaviours
            .listeners
            .extend(ripple::install_ripples(&document));
        behaviours
            .listeners
            .extend(analytics::install_button_tracking(&document));
        behaviours
            .listeners
            .extend(cards::install_card_hover(&document));
        behaviours
            .listeners
            .extend(preloader::install_preloader(&document));

        behaviours
            .observers
            .extend(counter::install_counters(&document));
        behaviours
            .observers
            .extend(reactor::install_reveal(&document));
        behaviours
            .observers
            .extend(lazy::install_lazy_images(&document));

        info!(
            "Page behaviours attached: {} listeners, {} observers",
            behaviours.listeners.len(),
            behaviours.observers.len()
        );
        behaviours
    }
}
