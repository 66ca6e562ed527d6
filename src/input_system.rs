use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can perform
///
/// Raw key and mouse events are translated into these according to the
/// current `InputContext`, so the session never sees keys that mean nothing
/// in its current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === World ===
    Jump,
    Hack,
    TogglePause,

    // === Hacking minigame ===
    Digit(char),
    Backspace,
    Submit,
    CancelHack,

    // === Mouse ===
    LeftClick(i32, i32),

    // === System ===
    Quit,
}

/// Which screen currently owns the input
///
/// Exactly one context is active; during a session it mirrors the session's
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    MainMenu,
    World,
    Paused,
    Shop,
    Hacking,
}

/// Held state sampled once per frame, after the frame's events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub mouse: (i32, i32),
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// # Architecture
///
/// 1. SDL2 events are drained for the frame
/// 2. Before each event, the owner sets the current InputContext
/// 3. The event is translated for that context (or dropped) and applied,
///    so a key right after a mode change is read in the new mode
/// 4. Held movement keys and the mouse position are sampled into a
///    `FrameInput` for the frame's tick
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::MainMenu,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Drains every pending event; translate them one at a time.
    pub fn poll_events(event_pump: &mut EventPump) -> Vec<Event> {
        event_pump.poll_iter().collect()
    }

    /// Samples held keys and the mouse position.
    pub fn sample_held(event_pump: &EventPump) -> FrameInput {
        let keyboard = event_pump.keyboard_state();
        let mouse = event_pump.mouse_state();

        FrameInput {
            move_left: keyboard.is_scancode_pressed(Scancode::A),
            move_right: keyboard.is_scancode_pressed(Scancode::D),
            mouse: (mouse.x(), mouse.y()),
        }
    }

    pub fn translate_event(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.translate_key(*key),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(GameAction::LeftClick(*x, *y)),
            _ => None,
        }
    }

    /// Maps a key press to an action for the current context
    pub fn translate_key(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::MainMenu => None,
            InputContext::World => match key {
                Keycode::W => Some(GameAction::Jump),
                Keycode::H => Some(GameAction::Hack),
                Keycode::Escape => Some(GameAction::TogglePause),
                _ => None,
            },
            InputContext::Paused | InputContext::Shop => match key {
                Keycode::Escape => Some(GameAction::TogglePause),
                _ => None,
            },
            InputContext::Hacking => match key {
                Keycode::Escape => Some(GameAction::CancelHack),
                Keycode::Return | Keycode::KpEnter => Some(GameAction::Submit),
                Keycode::Backspace => Some(GameAction::Backspace),
                _ => digit_for(key).map(GameAction::Digit),
            },
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Digit typed by a number-row or keypad key
fn digit_for(key: Keycode) -> Option<char> {
    let digit = match key {
        Keycode::Num0 | Keycode::Kp0 => '0',
        Keycode::Num1 | Keycode::Kp1 => '1',
        Keycode::Num2 | Keycode::Kp2 => '2',
        Keycode::Num3 | Keycode::Kp3 => '3',
        Keycode::Num4 | Keycode::Kp4 => '4',
        Keycode::Num5 | Keycode::Kp5 => '5',
        Keycode::Num6 | Keycode::Kp6 => '6',
        Keycode::Num7 | Keycode::Kp7 => '7',
        Keycode::Num8 | Keycode::Kp8 => '8',
        Keycode::Num9 | Keycode::Kp9 => '9',
        _ => return None,
    };
    Some(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_in(context: InputContext) -> InputSystem {
        let mut input = InputSystem::new();
        input.set_context(context);
        input
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::MainMenu);
        assert_eq!(input.translate_key(Keycode::W), None);
    }

    #[test]
    fn test_world_keys() {
        let input = system_in(InputContext::World);
        assert_eq!(input.translate_key(Keycode::W), Some(GameAction::Jump));
        assert_eq!(input.translate_key(Keycode::H), Some(GameAction::Hack));
        assert_eq!(input.translate_key(Keycode::Escape), Some(GameAction::TogglePause));
        assert_eq!(input.translate_key(Keycode::Num5), None);
    }

    #[test]
    fn test_world_keys_suppressed_in_overlays() {
        for context in [InputContext::Paused, InputContext::Shop, InputContext::Hacking] {
            let input = system_in(context);
            assert_eq!(input.translate_key(Keycode::W), None);
            assert_eq!(input.translate_key(Keycode::H), None);
        }
    }

    #[test]
    fn test_hacking_keys() {
        let input = system_in(InputContext::Hacking);
        assert_eq!(input.translate_key(Keycode::Escape), Some(GameAction::CancelHack));
        assert_eq!(input.translate_key(Keycode::Return), Some(GameAction::Submit));
        assert_eq!(input.translate_key(Keycode::Backspace), Some(GameAction::Backspace));
        assert_eq!(input.translate_key(Keycode::Num7), Some(GameAction::Digit('7')));
        assert_eq!(input.translate_key(Keycode::Kp0), Some(GameAction::Digit('0')));
        assert_eq!(input.translate_key(Keycode::Q), None);
    }

    #[test]
    fn test_mouse_events_in_every_context() {
        let click = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 12,
            y: 34,
        };
        for context in [
            InputContext::MainMenu,
            InputContext::World,
            InputContext::Paused,
            InputContext::Shop,
            InputContext::Hacking,
        ] {
            let input = system_in(context);
            assert_eq!(input.translate_event(&click), Some(GameAction::LeftClick(12, 34)));
        }
    }

    #[test]
    fn test_right_click_ignored() {
        let input = system_in(InputContext::Paused);
        let click = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 1,
            y: 1,
        };
        assert_eq!(input.translate_event(&click), None);
    }

    #[test]
    fn test_keys_follow_context_switch_mid_frame() {
        let mut input = system_in(InputContext::World);
        assert_eq!(input.translate_key(Keycode::H), Some(GameAction::Hack));

        input.set_context(InputContext::Hacking);
        assert_eq!(input.translate_key(Keycode::Num4), Some(GameAction::Digit('4')));

        input.set_context(InputContext::Paused);
        assert_eq!(input.translate_key(Keycode::Escape), Some(GameAction::TogglePause));
        input.set_context(InputContext::World);
        assert_eq!(input.translate_key(Keycode::W), Some(GameAction::Jump));
    }

    #[test]
    fn test_mouse_motion_ignored() {
        let input = system_in(InputContext::Paused);
        let motion = Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: sdl2::mouse::MouseState::from_sdl_state(0),
            x: 40,
            y: 50,
            xrel: 1,
            yrel: 1,
        };
        assert_eq!(input.translate_event(&motion), None);
    }

    #[test]
    fn test_quit_always_translated() {
        let input = system_in(InputContext::Hacking);
        assert_eq!(
            input.translate_event(&Event::Quit { timestamp: 0 }),
            Some(GameAction::Quit)
        );
    }
}
