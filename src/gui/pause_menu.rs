//! Pause Menu
//!
//! Shown when the player presses Escape in the world. Offers returning to
//! the game, opening the shop, or saving and leaving to the main menu.

use super::button::Button;
use crate::game::{BLUE, DARK_BLUE, GREEN, OVERLAY, PURPLE, RED, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE, YELLOW};
use crate::render::{Renderer, centered_text_x};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Pause menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Continue,
    Shop,
    ExitToMenu,
}

/// Pause menu state
///
/// The buttons are laid out once at construction.
pub struct PauseMenu {
    buttons: Vec<(PauseOption, Button)>,
}

impl PauseMenu {
    pub fn new() -> Self {
        let x = SCREEN_WIDTH as i32 / 2 - 150;
        let mid = SCREEN_HEIGHT as i32 / 2;
        let button = |y: i32, label: &str, color: Color, hover: Color| Button::new(Rect::new(x, y, 300, 50), label, color, hover);

        PauseMenu {
            buttons: vec![
                (PauseOption::Continue, button(mid - 60, "CONTINUE", GREEN, BLUE)),
                (PauseOption::Shop, button(mid + 20, "SHOP", PURPLE, DARK_BLUE)),
                (PauseOption::ExitToMenu, button(mid + 100, "EXIT TO MENU", RED, PURPLE)),
            ],
        }
    }

    pub fn update_hover(&mut self, mouse: (i32, i32)) {
        for (_, button) in &mut self.buttons {
            button.update_hover(mouse);
        }
    }

    /// Option under the click, if any
    pub fn handle_click(&self, click: (i32, i32)) -> Option<PauseOption> {
        self.buttons
            .iter()
            .find(|(_, button)| button.is_clicked(click))
            .map(|(option, _)| *option)
    }

    pub fn button_rect(&self, option: PauseOption) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(candidate, _)| *candidate == option)
            .map(|(_, button)| button.rect)
    }

    pub fn render(&self, renderer: &mut dyn Renderer, fish_count: u32) -> Result<(), String> {
        renderer.overlay(OVERLAY)?;

        let center_x = SCREEN_WIDTH as i32 / 2;
        let title_y = SCREEN_HEIGHT as i32 / 4;
        renderer.draw_text("PAUSED", centered_text_x("PAUSED", center_x, 6), title_y, WHITE, 6)?;

        let fish = format!("FISH: {}", fish_count);
        renderer.draw_text(&fish, centered_text_x(&fish, center_x, 3), title_y + 80, YELLOW, 3)?;

        for (_, button) in &self.buttons {
            button.render(renderer)?;
        }

        Ok(())
    }
}

impl Default for PauseMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;

    fn center_of(menu: &PauseMenu, option: PauseOption) -> (i32, i32) {
        let rect = menu.button_rect(option).expect("button");
        (rect.center().x(), rect.center().y())
    }

    #[test]
    fn test_each_button_maps_to_its_option() {
        let menu = PauseMenu::new();
        for option in [PauseOption::Continue, PauseOption::Shop, PauseOption::ExitToMenu] {
            assert_eq!(menu.handle_click(center_of(&menu, option)), Some(option));
        }
    }

    #[test]
    fn test_click_outside_ignored() {
        let menu = PauseMenu::new();
        assert_eq!(menu.handle_click((5, 5)), None);
    }

    #[test]
    fn test_render_shows_title_and_fish() {
        let menu = PauseMenu::new();
        let mut renderer = RecordingRenderer::default();
        menu.render(&mut renderer, 12).expect("render");

        let texts = renderer.texts();
        assert_eq!(texts[0], "PAUSED");
        assert_eq!(texts[1], "FISH: 12");
        assert!(texts.contains(&"EXIT TO MENU"));
    }
}
