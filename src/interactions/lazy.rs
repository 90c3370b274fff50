use log::debug;
use web_sys::{Document, Element};

use crate::dom;
use crate::observer::{ObserverOptions, OneShotObserver};

pub const DEFERRED_SOURCE_ATTR: &str = "data-src";

/// Swaps the deferred source in and drops the marker.
pub fn load_image(image: &Element) {
    let Some(src) = image.get_attribute(DEFERRED_SOURCE_ATTR) else {
        return;
    };
    let _ = image.set_attribute("src", &src);
    let _ = image.remove_attribute(DEFERRED_SOURCE_ATTR);
    debug!("Loaded deferred image {}", src);
}

pub fn install_lazy_images(document: &Document) -> Option<OneShotObserver> {
    let images = dom::query_all(document, "img[data-src]");
    if images.is_empty() {
        return None;
    }
    let observer = OneShotObserver::new(ObserverOptions::default(), |image, _| load_image(&image))?;
    for image in &images {
        observer.observe(image);
    }
    Some(observer)
}
