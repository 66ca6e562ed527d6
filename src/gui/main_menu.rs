//! Title screen with the best saved fish count

use super::button::Button;
use crate::game::{BLUE, GREEN, PURPLE, RED, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE, YELLOW};
use crate::render::{Renderer, centered_text_x};
use crate::save::SaveRecord;
use chrono::DateTime;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub const TITLE: &str = "CYBER BARSIK 2045";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    Start,
    Exit,
}

pub struct MainMenu {
    record_line: String,
    saved_line: Option<String>,
    start_button: Button,
    exit_button: Button,
}

impl MainMenu {
    /// `record` is the readable save, if there is one.
    pub fn new(record: Option<&SaveRecord>) -> Self {
        let record_line = match record {
            Some(record) => format!("RECORD: {} FISH", record.fish),
            None => "RECORD: NO DATA".to_string(),
        };
        let saved_line = record
            .and_then(|record| record.saved_at.as_deref())
            .and_then(format_saved_at);

        let x = SCREEN_WIDTH as i32 / 2 - 150;
        let mid = SCREEN_HEIGHT as i32 / 2;

        MainMenu {
            record_line,
            saved_line,
            start_button: Button::new(Rect::new(x, mid, 300, 50), "START", GREEN, BLUE),
            exit_button: Button::new(Rect::new(x, mid + 80, 300, 50), "EXIT", RED, PURPLE),
        }
    }

    pub fn record_line(&self) -> &str {
        &self.record_line
    }

    pub fn update_hover(&mut self, mouse: (i32, i32)) {
        self.start_button.update_hover(mouse);
        self.exit_button.update_hover(mouse);
    }

    pub fn handle_click(&self, click: (i32, i32)) -> Option<MainMenuOption> {
        if self.start_button.is_clicked(click) {
            Some(MainMenuOption::Start)
        } else if self.exit_button.is_clicked(click) {
            Some(MainMenuOption::Exit)
        } else {
            None
        }
    }

    pub fn start_rect(&self) -> Rect {
        self.start_button.rect
    }

    pub fn exit_rect(&self) -> Rect {
        self.exit_button.rect
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.overlay(Color::RGBA(0, 0, 0, 120))?;

        let center_x = SCREEN_WIDTH as i32 / 2;
        let top = SCREEN_HEIGHT as i32 / 4;
        renderer.draw_text(TITLE, centered_text_x(TITLE, center_x, 7), top - 40, GREEN, 7)?;
        renderer.draw_text(
            &self.record_line,
            centered_text_x(&self.record_line, center_x, 3),
            top + 50,
            YELLOW,
            3,
        )?;
        if let Some(saved) = &self.saved_line {
            renderer.draw_text(saved, centered_text_x(saved, center_x, 2), top + 90, WHITE, 2)?;
        }

        self.start_button.render(renderer)?;
        self.exit_button.render(renderer)
    }
}

/// "LAST SAVE: 2045-01-02 03:04" from an RFC 3339 timestamp
fn format_saved_at(saved_at: &str) -> Option<String> {
    let timestamp = DateTime::parse_from_rfc3339(saved_at).ok()?;
    Some(format!("LAST SAVE: {}", timestamp.format("%Y-%m-%d %H:%M")))
}
