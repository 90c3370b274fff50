//! Scroll-driven page state: which section the navbar highlights, which cards
//! have been revealed, and the hero parallax.
//!
//! Everything in this module is plain data and arithmetic. The browser side
//! lives in [`reactor`].

pub mod reactor;

use std::collections::BTreeSet;

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub key: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(key: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            key: key.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

pub fn scroll_position(scroll_offset: f64, nav_height: f64) -> f64 {
    scroll_offset + nav_height + config::SECTION_LOOKAHEAD_PX
}

/// Key of the section under the effective scroll position, first match in
/// document order.
pub fn active_section(
    scroll_offset: f64,
    nav_height: f64,
    sections: &[SectionBounds],
) -> Option<&str> {
    let position = scroll_position(scroll_offset, nav_height);
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.key.as_str())
}

/// Active flag over the navbar links. At most one link is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavHighlight {
    links: Vec<String>,
    active: Option<String>,
}

impl NavHighlight {
    pub fn new<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: links.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active() == Some(key)
    }

    /// Marks `key` and clears the rest. A key with no link clears everything.
    /// Returns whether anything changed.
    pub fn activate(&mut self, key: &str) -> bool {
        if !self.links.iter().any(|link| link == key) {
            return self.clear();
        }
        if self.is_active(key) {
            return false;
        }
        self.active = Some(key.to_string());
        true
    }

    pub fn clear(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Follows the result of [`active_section`].
    pub fn sync(&mut self, section: Option<&str>) -> bool {
        match section {
            Some(key) => self.activate(key),
            None => self.clear(),
        }
    }
}

/// One-shot reveal bookkeeping. Ids leave the pending set the first time they
/// are revealed and never come back.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    pending: BTreeSet<usize>,
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: usize) {
        if !self.revealed.contains(&id) {
            self.pending.insert(id);
        }
    }

    /// True only for the first reveal of a registered id.
    pub fn reveal(&mut self, id: usize) -> bool {
        if self.pending.remove(&id) {
            self.revealed.insert(id);
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

pub fn reveal_delay_ms(batch_index: usize) -> u32 {
    batch_index as u32 * config::REVEAL_STAGGER_MS
}

pub fn navbar_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > config::NAVBAR_SCROLLED_AFTER_PX
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub content_offset: f64,
    pub content_opacity: f64,
    pub visual_offset: f64,
}

pub fn hero_parallax(scroll_offset: f64) -> HeroParallax {
    HeroParallax {
        content_offset: scroll_offset * 0.5,
        content_opacity: (1.0 - scroll_offset / 600.0).clamp(0.0, 1.0),
        visual_offset: scroll_offset * 0.3,
    }
}

/// Each gradient orb drifts a little faster than the one before it.
pub fn orb_offset(index: usize, scroll_offset: f64) -> (f64, f64) {
    let speed = 0.2 + index as f64 * 0.1;
    (scroll_offset * speed, scroll_offset * speed * 0.5)
}
