//! A window with a title and one button; pressing it shows "¡Botón presionado!",
//! either under the button or in a separate "Mensaje" window.

pub mod config;
pub mod core;
pub mod gui;
pub mod logger;
pub mod ui;

pub use crate::config::Config;
pub use crate::core::Variant;
pub use crate::gui::{launch, run};
