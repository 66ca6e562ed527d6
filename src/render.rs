/// Drawing interface used by every game component
///
/// Components never touch the SDL canvas directly. They draw through the
/// `Renderer` trait (boxes, images, text, full-screen overlays), which keeps
/// the game logic testable with a recording renderer and confines SDL calls to
/// `SdlRenderer`.
///
/// Draw order is the caller's job: the session draws back to front
/// (background, platforms, drones, rewards, player, overlays).
use crate::assets::{Assets, ImageId};
use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// The narrow set of primitives the game needs from a graphics backend.
pub trait Renderer {
    /// Filled box, optionally with rounded corners.
    fn fill_rect(&mut self, rect: Rect, color: Color, border_radius: u32) -> Result<(), String>;

    /// Box outline `thickness` units wide, optionally with rounded corners.
    fn outline_rect(
        &mut self,
        rect: Rect,
        color: Color,
        thickness: u32,
        border_radius: u32,
    ) -> Result<(), String>;

    /// Image stretched into `rect`, mirrored horizontally if asked.
    fn draw_image(&mut self, image: ImageId, rect: Rect, flip_horizontal: bool) -> Result<(), String>;

    /// Bitmap text with its top-left corner at (x, y).
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32) -> Result<(), String>;

    /// Translucent layer over the whole screen.
    fn overlay(&mut self, color: Color) -> Result<(), String>;
}

/// Horizontal spans `(y, x_start, width)` covering a rounded rectangle.
///
/// Each row is inset at the corners by the amount a circle of `radius` leaves
/// uncovered. A radius of zero gives one full-width span per row.
pub fn rounded_spans(rect: Rect, radius: u32) -> Vec<(i32, i32, u32)> {
    let radius = radius.min(rect.width() / 2).min(rect.height() / 2) as f32;
    let height = rect.height() as i32;
    let mut spans = Vec::with_capacity(rect.height() as usize);

    for row in 0..height {
        // Distance from the row centre to the nearest corner circle centre
        let from_top = radius - (row as f32 + 0.5);
        let from_bottom = radius - ((height - 1 - row) as f32 + 0.5);
        let dy = from_top.max(from_bottom).max(0.0);
        let inset = if dy > 0.0 {
            (radius - (radius * radius - dy * dy).max(0.0).sqrt()).round() as i32
        } else {
            0
        };

        let width = rect.width() as i32 - 2 * inset;
        if width > 0 {
            spans.push((rect.y() + row, rect.x() + inset, width as u32));
        }
    }

    spans
}

/// Centres text of the given scale horizontally on `center_x`.
pub fn centered_text_x(text: &str, center_x: i32, scale: u32) -> i32 {
    center_x - text::text_width(text, scale) as i32 / 2
}

/// `Renderer` over an SDL2 window canvas and the loaded image set.
pub struct SdlRenderer<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    assets: &'c Assets<'t>,
}

impl<'c, 't> SdlRenderer<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, assets: &'c Assets<'t>) -> Self {
        SdlRenderer { canvas, assets }
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    fn fill_spans(&mut self, spans: &[(i32, i32, u32)]) -> Result<(), String> {
        for &(y, x, width) in spans {
            self.canvas.fill_rect(Rect::new(x, y, width, 1))?;
        }
        Ok(())
    }

    fn with_blend<F>(&mut self, color: Color, draw: F) -> Result<(), String>
    where
        F: FnOnce(&mut Self) -> Result<(), String>,
    {
        let translucent = color.a < 255;
        if translucent {
            self.canvas.set_blend_mode(BlendMode::Blend);
        }
        self.canvas.set_draw_color(color);
        let result = draw(self);
        if translucent {
            self.canvas.set_blend_mode(BlendMode::None);
        }
        result
    }
}

impl Renderer for SdlRenderer<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color, border_radius: u32) -> Result<(), String> {
        self.with_blend(color, |r| {
            if border_radius == 0 {
                r.canvas.fill_rect(rect)
            } else {
                r.fill_spans(&rounded_spans(rect, border_radius))
            }
        })
    }

    fn outline_rect(
        &mut self,
        rect: Rect,
        color: Color,
        thickness: u32,
        border_radius: u32,
    ) -> Result<(), String> {
        let outer = rounded_spans(rect, border_radius);
        let inner_rect = Rect::new(
            rect.x() + thickness as i32,
            rect.y() + thickness as i32,
            rect.width().saturating_sub(thickness * 2).max(1),
            rect.height().saturating_sub(thickness * 2).max(1),
        );
        let inner = rounded_spans(inner_rect, border_radius.saturating_sub(thickness));

        self.with_blend(color, |r| {
            for &(y, x, width) in &outer {
                let right = x + width as i32;
                match inner.iter().find(|span| span.0 == y) {
                    Some(&(_, ix, iwidth)) => {
                        let iright = ix + iwidth as i32;
                        if ix > x {
                            r.canvas.fill_rect(Rect::new(x, y, (ix - x) as u32, 1))?;
                        }
                        if right > iright {
                            r.canvas.fill_rect(Rect::new(iright, y, (right - iright) as u32, 1))?;
                        }
                    }
                    None => r.canvas.fill_rect(Rect::new(x, y, width, 1))?,
                }
            }
            Ok(())
        })
    }

    fn draw_image(&mut self, image: ImageId, rect: Rect, flip_horizontal: bool) -> Result<(), String> {
        match self.assets.texture(image) {
            Some(texture) => self
                .canvas
                .copy_ex(texture, None, rect, 0.0, None, flip_horizontal, false),
            None => {
                // Missing image: solid red placeholder box
                self.canvas.set_draw_color(Color::RGB(255, 0, 0));
                self.canvas.fill_rect(rect)
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32) -> Result<(), String> {
        self.with_blend(color, |r| {
            for pixel in text::glyph_pixels(text, x, y, scale) {
                r.canvas.fill_rect(pixel)?;
            }
            Ok(())
        })
    }

    fn overlay(&mut self, color: Color) -> Result<(), String> {
        self.with_blend(color, |r| r.canvas.fill_rect(None))
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording renderer for component tests

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Fill(Rect, Color),
        Outline(Rect, Color),
        Image(ImageId, Rect, bool),
        Text(String),
        Overlay,
    }

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn images(&self) -> Vec<(ImageId, Rect)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Image(id, rect, _) => Some((*id, *rect)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn fill_rect(&mut self, rect: Rect, color: Color, _border_radius: u32) -> Result<(), String> {
            self.calls.push(DrawCall::Fill(rect, color));
            Ok(())
        }

        fn outline_rect(
            &mut self,
            rect: Rect,
            color: Color,
            _thickness: u32,
            _border_radius: u32,
        ) -> Result<(), String> {
            self.calls.push(DrawCall::Outline(rect, color));
            Ok(())
        }

        fn draw_image(&mut self, image: ImageId, rect: Rect, flip: bool) -> Result<(), String> {
            self.calls.push(DrawCall::Image(image, rect, flip));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _color: Color, _scale: u32) -> Result<(), String> {
            self.calls.push(DrawCall::Text(text.to_string()));
            Ok(())
        }

        fn overlay(&mut self, _color: Color) -> Result<(), String> {
            self.calls.push(DrawCall::Overlay);
            Ok(())
        }
    }
}
