// Shared constants, enums and helper structs used throughout the game

use sdl2::pixels::Color;

/// Logical screen size; the whole game happens on one screen.
pub const SCREEN_WIDTH: u32 = 1240;
pub const SCREEN_HEIGHT: u32 = 768;

pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const RED: Color = Color::RGB(255, 0, 0);
pub const GREEN: Color = Color::RGB(0, 255, 0);
pub const BLUE: Color = Color::RGB(0, 0, 255);
pub const GRAY: Color = Color::RGB(100, 100, 100);
pub const PURPLE: Color = Color::RGB(128, 0, 128);
pub const DARK_BLUE: Color = Color::RGB(0, 0, 100);
pub const YELLOW: Color = Color::RGB(255, 255, 0);
pub const PANEL: Color = Color::RGB(30, 30, 50);

/// Dimming layer drawn under every modal overlay
pub const OVERLAY: Color = Color::RGBA(0, 0, 0, 200);

/// Box sizes of the image-backed entities.
///
/// They come from the loaded images (scaled), so the session is told about
/// them instead of hard-coding them. `Default` matches the placeholder image
/// size used when an image file is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySizes {
    pub player: (u32, u32),
    pub drone: (u32, u32),
    pub fish: (u32, u32),
    /// HUD counter icon
    pub fish_icon: (u32, u32),
}

impl Default for EntitySizes {
    fn default() -> Self {
        EntitySizes {
            player: (40, 40),
            drone: (20, 20),
            fish: (25, 25),
            fish_icon: (20, 20),
        }
    }
}

/// What the session loop tells the outer application after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Keep running the session
    Continue,
    /// "Exit to menu" was selected in the pause menu
    ReturnToMenu,
    /// Player health reached zero
    Defeat,
    /// Window close requested
    Quit,
}

impl SessionOutcome {
    /// Every outcome except `Continue` ends the session and writes the save
    pub fn ends_session(&self) -> bool {
        !matches!(self, SessionOutcome::Continue)
    }
}
