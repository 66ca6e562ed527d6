//! Health bar drawn above the player
//!
//! Stateless component: create one, call `render` with the entity's box and
//! health fraction each frame.
//!
//! # Example
//!
//! ```rust
//! let health_bar = HealthBar::new();
//! health_bar.render(renderer, player.get_bounds(), player.health_percentage())?;
//! ```

use crate::game::{GREEN, RED};
use crate::render::Renderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Configuration for health bar appearance
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Vertical offset from entity top (negative = above entity)
    pub offset_y: i32,

    /// Background bar color (shown where health is depleted)
    pub background_color: Color,

    /// Filled portion color
    pub health_color: Color,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 50,
            height: 5,
            offset_y: -10,
            background_color: RED,
            health_color: GREEN,
        }
    }
}

pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    /// Creates a 50x5 red/green bar 10 pixels above the entity
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    /// Box of the full (background) bar centred above `entity`
    pub fn background_rect(&self, entity: Rect) -> Rect {
        let bar_x = entity.x() + (entity.width() as i32 - self.style.width as i32) / 2;
        let bar_y = entity.y() + self.style.offset_y;
        Rect::new(bar_x, bar_y, self.style.width, self.style.height)
    }

    /// Width of the filled part for a health fraction (0.0 - 1.0)
    pub fn fill_width(&self, health_percentage: f32) -> u32 {
        (self.style.width as f32 * health_percentage.clamp(0.0, 1.0)) as u32
    }

    pub fn render(&self, renderer: &mut dyn Renderer, entity: Rect, health_percentage: f32) -> Result<(), String> {
        let background = self.background_rect(entity);
        renderer.fill_rect(background, self.style.background_color, 0)?;

        let health_width = self.fill_width(health_percentage);
        if health_width > 0 {
            let health_rect = Rect::new(background.x(), background.y(), health_width, self.style.height);
            renderer.fill_rect(health_rect, self.style.health_color, 0)?;
        }

        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}
