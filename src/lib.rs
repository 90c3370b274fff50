pub mod behaviours;
pub mod config;
pub mod counter;
pub mod dom;
pub mod interactions;
pub mod observer;
pub mod theme;
pub mod viewport;

pub mod components {
    pub mod navbar;
}
pub mod pages {
    pub mod landing;
}
