pub mod state;

pub use state::{Action, DemoState, UiEvent, Variant, WindowKind};
