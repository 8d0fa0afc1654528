//! Button rendering and press detection
use eframe::egui;

use super::components::ButtonRect;

pub const FOREGROUND: egui::Color32 = egui::Color32::BLACK;
pub const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
pub const BORDER_WIDTH: f32 = 1.0;

/// Draws an outlined button with its label centered inside.
///
/// `origin` is the window's top-left corner in screen space.
pub fn draw_button(
    painter: &egui::Painter,
    origin: egui::Pos2,
    button: &ButtonRect,
    label: &str,
    font: egui::FontId,
) {
    let rect = button.to_rect(origin);

    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(BORDER_WIDTH, FOREGROUND),
        egui::epaint::StrokeKind::Inside,
    );
    painter.text(rect.center(), egui::Align2::CENTER_CENTER, label, font, FOREGROUND);

    // Pointer hint only; presses are decided by `pressed_at` + hit-testing
    let hovered = painter
        .ctx()
        .input(|i| i.pointer.hover_pos())
        .is_some_and(|pos| rect.contains(pos));
    if hovered {
        painter.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
}

/// Draws `text` horizontally centered in the window, its laid-out bottom edge at `bottom`.
pub fn draw_centered_text(
    painter: &egui::Painter,
    origin: egui::Pos2,
    window_width: f32,
    bottom: f32,
    text: &str,
    font: egui::FontId,
) {
    painter.text(
        origin + egui::vec2(window_width / 2.0, bottom),
        egui::Align2::CENTER_BOTTOM,
        text,
        font,
        FOREGROUND,
    );
}

/// Window-local position of the first pointer button press this frame, if any.
///
/// Any mouse button counts, like a raw button-press event.
pub fn pressed_at(ctx: &egui::Context, origin: egui::Pos2) -> Option<egui::Pos2> {
    ctx.input(|i| {
        i.events.iter().find_map(|event| match event {
            egui::Event::PointerButton { pos, pressed: true, .. } => Some(*pos - origin.to_vec2()),
            _ => None,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_input(pos: egui::Pos2, button: egui::PointerButton) -> egui::RawInput {
        egui::RawInput {
            events: vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    modifiers: egui::Modifiers::NONE,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn reports_press_position() {
        let ctx = egui::Context::default();
        let mut seen = None;
        let _ = ctx.run(press_input(egui::pos2(240.0, 160.0), egui::PointerButton::Primary), |ctx| {
            seen = pressed_at(ctx, egui::Pos2::ZERO);
        });
        assert_eq!(seen, Some(egui::pos2(240.0, 160.0)));
    }

    #[test]
    fn secondary_button_counts_too() {
        let ctx = egui::Context::default();
        let mut seen = None;
        let _ = ctx.run(press_input(egui::pos2(12.0, 34.0), egui::PointerButton::Secondary), |ctx| {
            seen = pressed_at(ctx, egui::Pos2::ZERO);
        });
        assert_eq!(seen, Some(egui::pos2(12.0, 34.0)));
    }

    #[test]
    fn position_is_window_local() {
        let ctx = egui::Context::default();
        let mut seen = None;
        let _ = ctx.run(press_input(egui::pos2(110.0, 70.0), egui::PointerButton::Primary), |ctx| {
            seen = pressed_at(ctx, egui::pos2(100.0, 50.0));
        });
        assert_eq!(seen, Some(egui::pos2(10.0, 20.0)));
    }

    #[test]
    fn release_and_moves_are_not_presses() {
        let ctx = egui::Context::default();
        let pos = egui::pos2(240.0, 160.0);
        let input = egui::RawInput {
            events: vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    modifiers: egui::Modifiers::NONE,
                },
            ],
            ..Default::default()
        };
        let mut seen = Some(egui::Pos2::ZERO);
        let _ = ctx.run(input, |ctx| {
            seen = pressed_at(ctx, egui::Pos2::ZERO);
        });
        assert_eq!(seen, None);
    }

    #[test]
    fn centered_text_bottom_edge_sits_at_bottom() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(480.0, 320.0))),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                draw_centered_text(
                    ui.painter(),
                    egui::Pos2::ZERO,
                    480.0,
                    40.0,
                    "Aplicación de Botón",
                    egui::FontId::monospace(18.0),
                );
            });
        });

        let text = output
            .shapes
            .iter()
            .find_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.clone()),
                _ => None,
            })
            .expect("text shape painted");
        let size = text.galley.size();
        assert!((text.pos.y + size.y - 40.0).abs() <= 1.0, "text at {:?} size {:?}", text.pos, size);
        assert!((text.pos.x + size.x / 2.0 - 240.0).abs() <= 1.0, "text at {:?} size {:?}", text.pos, size);
    }
}
