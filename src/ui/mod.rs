pub mod app;
pub mod buttons;
pub mod components;

pub use app::PresionemeApp;
