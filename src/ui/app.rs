//! The eframe application: turns egui input into `UiEvent`s and paints the result.
use crate::config::Config;
use crate::core::{Action, DemoState, UiEvent, Variant, WindowKind};
use eframe::egui;
use super::buttons;
use super::components::Surface;

pub struct PresionemeApp {
    config: Config,
    state: DemoState,
    font: egui::FontId,
    style_initialized: bool,
    main_exposed: bool,
    dialog_exposed: bool,
}

fn dialog_viewport_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("presioneme_dialog")
}

impl PresionemeApp {
    pub fn new(variant: Variant, config: Config) -> Self {
        let state = DemoState::new(variant, &config);
        let font = egui::FontId::monospace(config.font_size);

        Self {
            config,
            state,
            font,
            style_initialized: false,
            main_exposed: false,
            dialog_exposed: false,
        }
    }

    fn init_style(&mut self, ctx: &egui::Context) {
        if self.style_initialized {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = buttons::BACKGROUND;
        style.visuals.window_fill = buttons::BACKGROUND;
        style.visuals.override_text_color = Some(buttons::FOREGROUND);
        ctx.set_style(style);
        self.style_initialized = true;
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: UiEvent) {
        match self.state.handle(event) {
            Action::None => {}
            Action::Redraw(_) => ctx.request_repaint(),
            Action::OpenDialog => {
                log::info!("💬 Opening \"{}\" window", self.config.dialog_title);
                self.dialog_exposed = false;
                ctx.request_repaint();
            }
            Action::CloseDialog => {
                log::info!("Closing \"{}\" window", self.config.dialog_title);
                ctx.request_repaint();
            }
            Action::Quit => log::info!("👋 Main window closed, leaving event loop"),
        }
    }

    /// Emits the expose/resize/close/press events of the window `ctx` currently draws.
    fn collect_events(&mut self, ctx: &egui::Context, window: WindowKind, origin: egui::Pos2) {
        let exposed = match window {
            WindowKind::Main => &mut self.main_exposed,
            WindowKind::Dialog => &mut self.dialog_exposed,
        };
        if !*exposed {
            *exposed = true;
            self.dispatch(ctx, UiEvent::Expose(window));
        }

        let size = ctx.screen_rect().size();
        let known = match window {
            WindowKind::Main => Some(self.state.main().size()),
            WindowKind::Dialog => self.state.dialog().map(Surface::size),
        };
        if known.is_some_and(|known| known != size) {
            self.dispatch(ctx, UiEvent::Resize { window, width: size.x, height: size.y });
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.dispatch(ctx, UiEvent::CloseRequest(window));
            return;
        }

        if let Some(pos) = buttons::pressed_at(ctx, origin) {
            self.dispatch(ctx, UiEvent::ButtonPress { window, x: pos.x, y: pos.y });
        }
    }

    fn paint_main(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let main = self.state.main();

        buttons::draw_centered_text(
            painter,
            origin,
            main.width,
            self.config.heading_bottom,
            &self.config.heading,
            self.font.clone(),
        );
        buttons::draw_button(painter, origin, &main.button, &self.config.button_label, self.font.clone());

        if self.state.message_visible() {
            buttons::draw_centered_text(
                painter,
                origin,
                main.width,
                main.button.bottom() + self.config.message_gap,
                &self.config.message,
                self.font.clone(),
            );
        }
    }

    fn paint_dialog(&self, painter: &egui::Painter, origin: egui::Pos2, dialog: &Surface) {
        buttons::draw_centered_text(
            painter,
            origin,
            dialog.width,
            self.config.dialog_message_bottom,
            &self.config.message,
            self.font.clone(),
        );
        buttons::draw_button(painter, origin, &dialog.button, &self.config.accept_label, self.font.clone());
    }

    /// Shows the dialog for this frame and returns its drawing area in screen space.
    fn show_dialog(&mut self, ctx: &egui::Context) -> egui::Rect {
        let builder = egui::ViewportBuilder::default()
            .with_title(self.config.dialog_title.clone())
            .with_inner_size([self.config.dialog_width, self.config.dialog_height]);

        ctx.show_viewport_immediate(dialog_viewport_id(), builder, |ctx, class| {
            if matches!(class, egui::ViewportClass::Embedded) {
                return self.show_embedded_dialog(ctx);
            }

            let area = ctx.screen_rect();
            self.collect_events(ctx, WindowKind::Dialog, area.min);

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE.fill(buttons::BACKGROUND))
                .show(ctx, |ui| {
                    if let Some(dialog) = self.state.dialog() {
                        self.paint_dialog(ui.painter(), area.min, dialog);
                    }
                });
            area
        })
    }

    /// Backends without multi-window support draw the dialog as an egui window
    /// over the main one. Both windows then read the same input events.
    fn show_embedded_dialog(&mut self, ctx: &egui::Context) -> egui::Rect {
        let size = egui::vec2(self.config.dialog_width, self.config.dialog_height);
        let mut open = true;
        let mut press = None;
        let mut area = egui::Rect::from_min_size(egui::Pos2::ZERO, size);

        egui::Window::new(self.config.dialog_title.clone())
            .id(egui::Id::new(dialog_viewport_id()))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .pivot(egui::Align2::CENTER_CENTER)
            .default_pos(ctx.screen_rect().center())
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::click());
                area = rect;
                press = buttons::pressed_at(ctx, rect.min);
                if let Some(dialog) = self.state.dialog() {
                    self.paint_dialog(ui.painter(), rect.min, dialog);
                }
            });

        let first_frame = !self.dialog_exposed;
        if first_frame {
            self.dialog_exposed = true;
            self.dispatch(ctx, UiEvent::Expose(WindowKind::Dialog));
        }
        if !open {
            self.dispatch(ctx, UiEvent::CloseRequest(WindowKind::Dialog));
        } else if let Some(pos) = press.filter(|_| !first_frame) {
            // On the opening frame the press belongs to the main window.
            self.dispatch(ctx, UiEvent::ButtonPress { window: WindowKind::Dialog, x: pos.x, y: pos.y });
        }
        area
    }

    /// One frame of both windows. Returns where the dialog was drawn, if it is open.
    fn show_frame(&mut self, ctx: &egui::Context) -> Option<egui::Rect> {
        self.init_style(ctx);

        let origin = ctx.screen_rect().min;
        self.collect_events(ctx, WindowKind::Main, origin);
        if !self.state.is_running() {
            // eframe tears the window down after this frame
            return None;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(buttons::BACKGROUND))
            .show(ctx, |ui| self.paint_main(ui.painter(), origin));

        if self.state.dialog_open() {
            Some(self.show_dialog(ctx))
        } else {
            None
        }
    }
}

impl eframe::App for PresionemeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_frame(ctx);
    }
}
