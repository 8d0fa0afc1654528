//! The demo's event switch: window events in, one action out.

use crate::config::Config;
use crate::ui::components::Surface;

/// Which of the two behaviours the screen has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The message appears under the button, in the main window.
    Inline,
    /// The message appears in a secondary window with an accept button.
    Dialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Main,
    Dialog,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Expose(WindowKind),
    Resize { window: WindowKind, width: f32, height: f32 },
    ButtonPress { window: WindowKind, x: f32, y: f32 },
    CloseRequest(WindowKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw(WindowKind),
    OpenDialog,
    CloseDialog,
    Quit,
}

/// Everything the screen remembers between events.
#[derive(Debug, Clone)]
pub struct DemoState {
    variant: Variant,
    main: Surface,
    dialog: Option<Surface>,
    dialog_size: (f32, f32),
    accept_size: (f32, f32),
    message_visible: bool,
    running: bool,
}

impl DemoState {
    pub fn new(variant: Variant, config: &Config) -> Self {
        Self {
            variant,
            main: Surface::new(
                config.window_width,
                config.window_height,
                config.button_width,
                config.button_height,
            ),
            dialog: None,
            dialog_size: (config.dialog_width, config.dialog_height),
            accept_size: (config.accept_width, config.accept_height),
            message_visible: false,
            running: true,
        }
    }

    pub fn main(&self) -> &Surface {
        &self.main
    }

    pub fn dialog(&self) -> Option<&Surface> {
        self.dialog.as_ref()
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, event: UiEvent) -> Action {
        if !self.running {
            return Action::None;
        }

        let action = match event {
            UiEvent::Expose(window) => match self.surface_mut(window) {
                Some(_) => Action::Redraw(window),
                None => Action::None,
            },
            UiEvent::Resize { window, width, height } => match self.surface_mut(window) {
                Some(surface) => {
                    surface.resize(width, height);
                    Action::Redraw(window)
                }
                None => Action::None,
            },
            UiEvent::ButtonPress { window: WindowKind::Main, x, y } => {
                if self.main.button.contains(x, y) {
                    self.press_main_button()
                } else {
                    Action::None
                }
            }
            UiEvent::ButtonPress { window: WindowKind::Dialog, x, y } => {
                let accepted = self
                    .dialog
                    .as_ref()
                    .is_some_and(|dialog| dialog.button.contains(x, y));
                if accepted {
                    self.dialog = None;
                    Action::CloseDialog
                } else {
                    Action::None
                }
            }
            UiEvent::CloseRequest(WindowKind::Main) => {
                self.running = false;
                Action::Quit
            }
            UiEvent::CloseRequest(WindowKind::Dialog) => match self.dialog.take() {
                Some(_) => Action::CloseDialog,
                None => Action::None,
            },
        };

        log::debug!("{:?} -> {:?}", event, action);
        action
    }

    fn press_main_button(&mut self) -> Action {
        match self.variant {
            Variant::Inline => {
                self.message_visible = true;
                Action::Redraw(WindowKind::Main)
            }
            // Modal: further presses wait until the dialog is dismissed
            Variant::Dialog if self.dialog.is_some() => Action::None,
            Variant::Dialog => {
                let (width, height) = self.dialog_size;
                let (accept_width, accept_height) = self.accept_size;
                self.dialog = Some(Surface::new(width, height, accept_width, accept_height));
                Action::OpenDialog
            }
        }
    }

    fn surface_mut(&mut self, window: WindowKind) -> Option<&mut Surface> {
        match window {
            WindowKind::Main => Some(&mut self.main),
            WindowKind::Dialog => self.dialog.as_mut(),
        }
    }
}
