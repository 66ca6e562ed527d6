//! Drone hacking minigame
//!
//! A random 4-digit code is shown; the player must type it and press Enter.
//! A wrong code clears the input and the attempt continues. Escape aborts.

use crate::drone::DroneId;
use crate::game::{GREEN, OVERLAY, PANEL, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE, YELLOW};
use crate::input_system::GameAction;
use crate::render::{Renderer, centered_text_x};
use rand::Rng;
use sdl2::rect::Rect;
use tracing::debug;

pub const CODE_LENGTH: usize = 4;
const PANEL_SIZE: (u32, u32) = (500, 250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackOutcome {
    Pending,
    Success,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct HackingGame {
    drone: DroneId,
    code: String,
    input: String,
}

impl HackingGame {
    pub fn new(drone: DroneId, rng: &mut impl Rng) -> Self {
        let code = rng.gen_range(1000..=9999u32).to_string();
        HackingGame {
            drone,
            code,
            input: String::new(),
        }
    }

    pub fn drone(&self) -> DroneId {
        self.drone
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Appends a digit; anything else, or a fifth character, is ignored.
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.input.len() < CODE_LENGTH {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn submit(&mut self) -> HackOutcome {
        if self.input == self.code {
            HackOutcome::Success
        } else {
            debug!(input = %self.input, "hack code mismatch");
            self.input.clear();
            HackOutcome::Pending
        }
    }

    /// Feeds one input action to the minigame
    pub fn handle_action(&mut self, action: GameAction) -> HackOutcome {
        match action {
            GameAction::Digit(c) => self.push_digit(c),
            GameAction::Backspace => self.backspace(),
            GameAction::Submit => return self.submit(),
            GameAction::CancelHack => return HackOutcome::Cancelled,
            _ => {}
        }
        HackOutcome::Pending
    }

    /// 25% per typed digit
    pub fn progress(&self) -> u32 {
        self.input.len() as u32 * 25
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.overlay(OVERLAY)?;

        let (width, height) = PANEL_SIZE;
        let panel = Rect::new(
            (SCREEN_WIDTH - width) as i32 / 2,
            (SCREEN_HEIGHT - height) as i32 / 2,
            width,
            height,
        );
        renderer.fill_rect(panel, PANEL, 10)?;
        renderer.outline_rect(panel, GREEN, 2, 10)?;

        let center_x = panel.center().x();
        let lines = [
            (format!("HACKING: {}%", self.progress()), GREEN, 30),
            (format!("CODE: {}", self.code), YELLOW, 85),
            (format!("INPUT: {}", self.input), WHITE, 140),
        ];
        for (text, color, offset) in &lines {
            renderer.draw_text(text, centered_text_x(text, center_x, 4), panel.y() + offset, *color, 4)?;
        }

        let hint = "[ESC] - CANCEL";
        renderer.draw_text(hint, centered_text_x(hint, center_x, 2), panel.y() + 210, WHITE, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> HackingGame {
        HackingGame::new(DroneId(7), &mut StdRng::seed_from_u64(3))
    }

    fn type_code(game: &mut HackingGame, code: &str) {
        for c in code.chars() {
            game.handle_action(GameAction::Digit(c));
        }
    }

    #[test]
    fn test_code_is_four_digits() {
        for seed in 0..100 {
            let game = HackingGame::new(DroneId(0), &mut StdRng::seed_from_u64(seed));
            let value: u32 = game.code().parse().expect("numeric code");
            assert!((1000..=9999).contains(&value));
        }
    }

    #[test]
    fn test_correct_code_succeeds() {
        let mut game = game();
        let code = game.code().to_string();
        type_code(&mut game, &code);

        assert_eq!(game.progress(), 100);
        assert_eq!(game.handle_action(GameAction::Submit), HackOutcome::Success);
        assert_eq!(game.drone(), DroneId(7));
    }

    #[test]
    fn test_wrong_code_clears_input_and_continues() {
        let mut game = game();
        let wrong = if game.code() == "1111" { "2222" } else { "1111" };
        type_code(&mut game, wrong);

        assert_eq!(game.handle_action(GameAction::Submit), HackOutcome::Pending);
        assert_eq!(game.input(), "");
    }

    #[test]
    fn test_input_capped_and_filtered() {
        let mut game = game();
        game.push_digit('x');
        type_code(&mut game, "123456");

        assert_eq!(game.input(), "1234");
        assert_eq!(game.progress(), 100);
    }

    #[test]
    fn test_backspace() {
        let mut game = game();
        type_code(&mut game, "12");
        game.handle_action(GameAction::Backspace);
        assert_eq!(game.input(), "1");
        assert_eq!(game.progress(), 25);

        game.backspace();
        game.backspace();
        assert_eq!(game.input(), "");
    }

    #[test]
    fn test_cancel() {
        let mut game = game();
        type_code(&mut game, "12");
        assert_eq!(game.handle_action(GameAction::CancelHack), HackOutcome::Cancelled);
    }

    #[test]
    fn test_render_lines() {
        let mut game = game();
        type_code(&mut game, "9");
        let mut renderer = RecordingRenderer::default();
        game.render(&mut renderer).expect("render");

        let texts = renderer.texts();
        assert_eq!(texts[0], "HACKING: 25%");
        assert_eq!(texts[1], format!("CODE: {}", game.code()));
        assert_eq!(texts[2], "INPUT: 9");
        assert_eq!(texts[3], "[ESC] - CANCEL");
    }
}
