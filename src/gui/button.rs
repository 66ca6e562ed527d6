//! Clickable rounded button
//!
//! Buttons are built once when their overlay is created and reused for both
//! drawing and hit-testing, so what is drawn is always what is clicked.

use crate::collision::contains_point;
use crate::game::WHITE;
use crate::render::{Renderer, centered_text_x};
use crate::text::GLYPH_HEIGHT;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub const BUTTON_RADIUS: u32 = 10;
const BORDER_THICKNESS: u32 = 2;

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub color: Color,
    pub hover_color: Color,
    pub text_scale: u32,
    hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, color: Color, hover_color: Color) -> Self {
        Button {
            rect,
            label: label.into(),
            color,
            hover_color,
            text_scale: 3,
            hovered: false,
        }
    }

    /// Smaller label text, for buttons with long captions
    pub fn with_text_scale(mut self, scale: u32) -> Self {
        self.text_scale = scale;
        self
    }

    /// Tracks whether the mouse is over the button. Returns the new state.
    pub fn update_hover(&mut self, mouse: (i32, i32)) -> bool {
        self.hovered = contains_point(&self.rect, mouse);
        self.hovered
    }

    pub fn is_clicked(&self, click: (i32, i32)) -> bool {
        contains_point(&self.rect, click)
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        let fill = if self.hovered { self.hover_color } else { self.color };
        renderer.fill_rect(self.rect, fill, BUTTON_RADIUS)?;
        renderer.outline_rect(self.rect, WHITE, BORDER_THICKNESS, BUTTON_RADIUS)?;

        let text_x = centered_text_x(&self.label, self.rect.center().x(), self.text_scale);
        let text_y = self.rect.center().y() - (GLYPH_HEIGHT * self.text_scale) as i32 / 2;
        renderer.draw_text(&self.label, text_x, text_y, WHITE, self.text_scale)
    }
}
