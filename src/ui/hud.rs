//! Screen-space HUD: fish counter and controls hint

use crate::assets::ImageId;
use crate::game::{PANEL, SCREEN_HEIGHT, WHITE};
use crate::render::Renderer;
use sdl2::rect::Rect;

pub const CONTROLS_HINT: &str = "A/D - MOVE | W - JUMP | H - HACK | ESC - MENU";

const COUNTER_PANEL: (i32, i32, u32, u32) = (20, 20, 200, 60);

/// Rounded panel in the top-left corner with a fish icon and "X n"
pub fn draw_fish_counter(renderer: &mut dyn Renderer, icon_size: (u32, u32), count: u32) -> Result<(), String> {
    let (x, y, width, height) = COUNTER_PANEL;
    let panel = Rect::new(x, y, width, height);
    renderer.fill_rect(panel, PANEL, 10)?;
    renderer.outline_rect(panel, WHITE, 2, 10)?;

    let (icon_width, icon_height) = icon_size;
    renderer.draw_image(ImageId::FishIcon, Rect::new(30, 30, icon_width, icon_height), false)?;

    renderer.draw_text(&format!("X {}", count), 80, 38, WHITE, 3)
}

pub fn draw_controls(renderer: &mut dyn Renderer) -> Result<(), String> {
    renderer.draw_text(CONTROLS_HINT, 10, SCREEN_HEIGHT as i32 - 24, WHITE, 2)
}
