use log::Level;

/// Look-ahead added below the navbar so the highlight switches a little
/// before a section's top reaches the viewport top.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// Scroll offset past which the navbar gets its `scrolled` class.
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;

pub const REVEAL_STAGGER_MS: u32 = 100;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: f64 = 30.0;

pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub const PRELOADER_FADE_MS: u32 = 300;

/// Local storage key holding "dark" or "light".
pub const THEME_STORAGE_KEY: &str = "theme";

/// Where the skip link jumps to.
pub const MAIN_CONTENT_ANCHOR: &str = "#home";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
