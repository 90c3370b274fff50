//! Small independent reactions to discrete user actions.

pub mod a11y;
pub mod analytics;
pub mod anchor;
pub mod cards;
pub mod keyboard;
pub mod lazy;
pub mod menu;
pub mod preloader;
pub mod ripple;
