//! Geometry of the clickable regions drawn by the windows.

use eframe::egui;

/// Hit region of a drawn button, in window-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ButtonRect {
    /// A `width` x `height` button centered in a `window_width` x `window_height` window.
    ///
    /// The offset is truncated toward zero, so the edges land on whole pixels.
    pub fn centered_in(window_width: f32, window_height: f32, width: f32, height: f32) -> Self {
        Self {
            x: ((window_width - width) / 2.0).trunc(),
            y: ((window_height - height) / 2.0).trunc(),
            width,
            height,
        }
    }

    /// Closed-bounds test: points on the edge count as inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The same region in screen space, given the window's top-left corner.
    pub fn to_rect(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(self.x, self.y),
            egui::vec2(self.width, self.height),
        )
    }
}

/// A window's current size and the button it keeps centered.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub button: ButtonRect,
}

impl Surface {
    pub fn new(width: f32, height: f32, button_width: f32, button_height: f32) -> Self {
        Self {
            width,
            height,
            button: ButtonRect::centered_in(width, height, button_width, button_height),
        }
    }

    /// Stores the new size and re-centers the button. Button size never changes.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.button = ButtonRect::centered_in(width, height, self.button.width, self.button.height);
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }
}
