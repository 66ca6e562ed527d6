//! One play session: the world plus the modal overlays on top of it
//!
//! Exactly one mode owns the input at a time:
//!
//! ```text
//! World --Esc--> Paused --Shop--> Shop
//!   ^  <-Continue/Esc-'  <-Back/Esc-'
//!   |
//!   '--H (with target)--> Hacking --success/cancel--> World
//! ```
//!
//! The world is frozen while Paused or in the Shop and keeps running while
//! Hacking.

use crate::audio::{Audio, SoundId};
use crate::gui::{HackOutcome, HackingGame, PauseMenu, PauseOption, Shop, ShopAction};
use crate::input_system::{FrameInput, GameAction, InputContext};
use crate::player::HorizontalMove;
use crate::render::Renderer;
use crate::save::SaveRecord;
use crate::ui::{HealthBar, hud};
use rand::Rng;
use tracing::info;

use super::{EntitySizes, GameWorld, SessionOutcome};

/// The active input mode
#[derive(Debug, Clone)]
pub enum Mode {
    World,
    Paused,
    Shop,
    Hacking(HackingGame),
}

pub struct Session {
    pub world: GameWorld,
    mode: Mode,
    pause_menu: PauseMenu,
    /// Built when the shop opens so its levels follow the player's upgrades
    shop: Option<Shop>,
    health_bar: HealthBar,
    fish_icon_size: (u32, u32),
}

impl Session {
    pub fn new(record: &SaveRecord, sizes: EntitySizes, rng: &mut impl Rng) -> Self {
        let world = GameWorld::new(record, sizes, rng);
        info!(
            fish = record.fish,
            health = record.health,
            upgrades = ?record.upgrades,
            "session started"
        );

        Session {
            world,
            mode: Mode::World,
            pause_menu: PauseMenu::new(),
            shop: None,
            health_bar: HealthBar::new(),
            fish_icon_size: sizes.fish_icon,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn input_context(&self) -> InputContext {
        match self.mode {
            Mode::World => InputContext::World,
            Mode::Paused => InputContext::Paused,
            Mode::Shop => InputContext::Shop,
            Mode::Hacking(_) => InputContext::Hacking,
        }
    }

    /// Progression snapshot to persist
    pub fn snapshot(&self) -> SaveRecord {
        self.world.player.to_record()
    }

    /// Advances one frame after the frame's actions were handled: hover,
    /// held movement and the simulation, if the mode lets the world run.
    pub fn tick(&mut self, input: &FrameInput, rng: &mut impl Rng, audio: &mut dyn Audio) -> SessionOutcome {
        self.update_hover(input.mouse);

        match self.mode {
            Mode::World => {
                if input.move_left {
                    self.world.player.move_horizontal(HorizontalMove::Left);
                }
                if input.move_right {
                    self.world.player.move_horizontal(HorizontalMove::Right);
                }
                self.world.step(rng, audio);
            }
            Mode::Hacking(_) => {
                self.world.step(rng, audio);
                self.cancel_hack_if_target_gone();
            }
            Mode::Paused | Mode::Shop => {}
        }

        if self.world.player.is_defeated() {
            info!(fish = self.world.player.fish_count, "player defeated");
            return SessionOutcome::Defeat;
        }

        SessionOutcome::Continue
    }

    /// Applies one discrete action in the current mode.
    ///
    /// The caller translates each event against `input_context()` right
    /// before this call, so keys after a mode change land in the new mode.
    pub fn handle_action(&mut self, action: GameAction, rng: &mut impl Rng, audio: &mut dyn Audio) -> SessionOutcome {
        if action == GameAction::Quit {
            return SessionOutcome::Quit;
        }

        match &mut self.mode {
            Mode::World => match action {
                GameAction::Jump => {
                    if self.world.player.try_jump() {
                        audio.play_sound(SoundId::Jump);
                    }
                }
                GameAction::Hack => self.start_hack(rng),
                GameAction::TogglePause => self.mode = Mode::Paused,
                _ => {}
            },
            Mode::Paused => match action {
                GameAction::TogglePause => self.mode = Mode::World,
                GameAction::LeftClick(x, y) => match self.pause_menu.handle_click((x, y)) {
                    Some(PauseOption::Continue) => self.mode = Mode::World,
                    Some(PauseOption::Shop) => {
                        self.shop = Some(Shop::new(&self.world.player.upgrades));
                        self.mode = Mode::Shop;
                    }
                    Some(PauseOption::ExitToMenu) => return SessionOutcome::ReturnToMenu,
                    None => {}
                },
                _ => {}
            },
            Mode::Shop => match action {
                GameAction::TogglePause => self.mode = Mode::Paused,
                GameAction::LeftClick(x, y) => {
                    let clicked = match self.shop.as_mut() {
                        Some(shop) => shop.handle_click((x, y), &mut self.world.player),
                        None => Some(ShopAction::Back),
                    };
                    if let Some(ShopAction::Back) = clicked {
                        self.mode = Mode::Paused;
                    }
                }
                _ => {}
            },
            Mode::Hacking(game) => match game.handle_action(action) {
                HackOutcome::Success => {
                    let drone = game.drone();
                    self.end_hack();
                    if self.world.complete_hack(drone) {
                        info!(drone = drone.0, "drone hacked, fish dropped");
                    } else {
                        info!(drone = drone.0, "drone hacked");
                    }
                    audio.play_sound(SoundId::Hack);
                }
                HackOutcome::Cancelled => self.end_hack(),
                HackOutcome::Pending => {}
            },
        }

        SessionOutcome::Continue
    }

    fn start_hack(&mut self, rng: &mut impl Rng) {
        let player = &mut self.world.player;
        if player.hacking {
            return;
        }
        if let Some(target) = player.target_drone {
            player.hacking = true;
            self.mode = Mode::Hacking(HackingGame::new(target, rng));
        }
    }

    fn end_hack(&mut self) {
        let player = &mut self.world.player;
        player.hacking = false;
        player.target_drone = None;
        self.mode = Mode::World;
    }

    fn cancel_hack_if_target_gone(&mut self) {
        if let Mode::Hacking(game) = &self.mode {
            if !self.world.has_drone(game.drone()) {
                info!(drone = game.drone().0, "hack target left the screen");
                self.end_hack();
            }
        }
    }

    fn update_hover(&mut self, mouse: (i32, i32)) {
        match self.mode {
            Mode::Paused => self.pause_menu.update_hover(mouse),
            Mode::Shop => {
                if let Some(shop) = self.shop.as_mut() {
                    shop.update_hover(mouse);
                }
            }
            Mode::World | Mode::Hacking(_) => {}
        }
    }

    /// Draws world, HUD and the active overlay, back to front
    pub fn render(&self, renderer: &mut dyn Renderer, ticks_ms: u32) -> Result<(), String> {
        let player = &self.world.player;
        self.world.render(renderer, &self.health_bar, ticks_ms)?;
        hud::draw_fish_counter(renderer, self.fish_icon_size, player.fish_count)?;
        hud::draw_controls(renderer)?;

        match &self.mode {
            Mode::World => Ok(()),
            Mode::Paused => self.pause_menu.render(renderer, player.fish_count),
            Mode::Shop => match &self.shop {
                Some(shop) => shop.render(renderer, player.fish_count),
                None => Ok(()),
            },
            Mode::Hacking(game) => game.render(renderer),
        }
    }
}
