use crate::assets::ImageId;
use crate::collision::{Collidable, check_collisions_with_collection};
use crate::combat::{DamageEvent, Invincibility, flicker_visible};
use crate::drone::DroneId;
use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::FLOOR_HEIGHT;
use crate::render::Renderer;
use crate::save::{MAX_HEALTH, SaveRecord, UpgradeKind, Upgrades};
use crate::ui::HealthBar;
use sdl2::rect::Rect;
use tracing::debug;

/// Downward acceleration per frame
pub const GRAVITY: f32 = 0.8;
pub const BASE_SPEED: i32 = 7;
pub const BASE_JUMP_POWER: f32 = 18.0;
pub const SPEED_PER_LEVEL: i32 = 2;
pub const JUMP_PER_LEVEL: f32 = 3.0;
/// How far the feet may have sunk into a platform and still land on it
pub const LANDING_TOLERANCE: i32 = 10;
/// Lowest the player's feet can go: the top of the floor
pub const GROUND_Y: i32 = (SCREEN_HEIGHT - FLOOR_HEIGHT) as i32;

/// Horizontal movement request for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalMove {
    Left,
    Right,
}

pub struct Player {
    pub x: i32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    pub jump_power: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub facing_right: bool,
    pub hacking: bool,
    /// Drone currently close enough to hack; recomputed every frame
    pub target_drone: Option<DroneId>,
    pub fish_count: u32,
    pub upgrades: Upgrades,
    pub health: i32,
    pub max_health: i32,
    pub invincibility: Invincibility,
    pub jumps_left: u32,
}

impl Player {
    /// Creates a player centred on screen with stats rebuilt from the record.
    pub fn from_record(record: &SaveRecord, size: (u32, u32)) -> Self {
        let (width, height) = size;
        let upgrades = record.upgrades;
        Player {
            x: (SCREEN_WIDTH / 2) as i32 - width as i32 / 2,
            y: (SCREEN_HEIGHT / 2) as f32 - (height / 2) as f32,
            width,
            height,
            speed: BASE_SPEED + SPEED_PER_LEVEL * upgrades.speed as i32,
            jump_power: BASE_JUMP_POWER + JUMP_PER_LEVEL * upgrades.jump as f32,
            velocity_y: 0.0,
            on_ground: false,
            facing_right: true,
            hacking: false,
            target_drone: None,
            fish_count: record.fish,
            upgrades,
            health: record.health,
            max_health: MAX_HEALTH,
            invincibility: Invincibility::Vulnerable,
            jumps_left: 1 + upgrades.double_jump,
        }
    }

    /// Progression snapshot for the save file
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            fish: self.fish_count,
            upgrades: self.upgrades,
            health: self.health.clamp(0, self.max_health),
            saved_at: None,
        }
    }

    /// Advances one physics frame against the given platforms.
    ///
    /// Gravity is integrated first, then the first platform (in list order)
    /// that the player is falling onto catches them.
    pub fn update<P: Collidable>(&mut self, platforms: &[P]) {
        self.invincibility.tick();

        self.velocity_y += GRAVITY;
        self.y += self.velocity_y;

        self.on_ground = false;
        for index in check_collisions_with_collection(&*self, platforms) {
            let platform = platforms[index].get_bounds();
            let gap = (self.get_bounds().bottom() - platform.top()).abs();
            if self.velocity_y > 0.0 && gap <= LANDING_TOLERANCE {
                self.land_on(platform.top());
                break;
            }
        }

        self.keep_in_bounds();
    }

    fn land_on(&mut self, surface_y: i32) {
        self.y = (surface_y - self.height as i32) as f32;
        self.velocity_y = 0.0;
        self.on_ground = true;
        self.jumps_left = 1 + self.upgrades.double_jump;
    }

    /// Invisible walls on the left, right and top. The floor top is a hard
    /// bottom bound, so a fast fall can never sink into the floor.
    fn keep_in_bounds(&mut self) {
        let max_x = SCREEN_WIDTH as i32 - self.width as i32;
        self.x = self.x.clamp(0, max_x.max(0));

        if self.y < 0.0 {
            self.y = 0.0;
        }

        let lowest_y = (GROUND_Y - self.height as i32) as f32;
        if self.y >= lowest_y {
            self.land_on(GROUND_Y);
        }
    }

    /// Direct position change; no acceleration or friction.
    pub fn move_horizontal(&mut self, direction: HorizontalMove) {
        match direction {
            HorizontalMove::Left => {
                self.x -= self.speed;
                self.facing_right = false;
            }
            HorizontalMove::Right => {
                self.x += self.speed;
                self.facing_right = true;
            }
        }
    }

    /// Jumps if possible. A jump from the ground is free; a jump in the air
    /// spends one of the extra charges granted by the double-jump upgrade.
    pub fn try_jump(&mut self) -> bool {
        if self.on_ground {
            self.velocity_y = -self.jump_power;
        } else if self.jumps_left > 1 {
            self.jumps_left -= 1;
            self.velocity_y = -self.jump_power;
        } else {
            return false;
        }

        self.on_ground = false;
        true
    }

    /// Applies a hit unless invincible. Returns whether the hit landed.
    pub fn take_damage(&mut self, event: DamageEvent) -> bool {
        if self.invincibility.is_active() {
            return false;
        }

        self.health -= event.amount;
        self.invincibility.trigger();
        debug!(amount = event.amount, source = ?event.source, health = self.health, "player hit");
        true
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    /// Makes a purchased upgrade take effect immediately.
    pub fn apply_upgrade(&mut self, kind: UpgradeKind) {
        *self.upgrades.level_mut(kind) += 1;
        match kind {
            UpgradeKind::Speed => self.speed += SPEED_PER_LEVEL,
            UpgradeKind::Jump => self.jump_power += JUMP_PER_LEVEL,
            UpgradeKind::DoubleJump => {
                self.upgrades.double_jump = 1;
                self.jumps_left = 2;
            }
        }
    }

    pub fn health_percentage(&self) -> f32 {
        (self.health.max(0) as f32 / self.max_health as f32).min(1.0)
    }

    pub fn render(&self, renderer: &mut dyn Renderer, health_bar: &HealthBar, ticks_ms: u32) -> Result<(), String> {
        let bounds = self.get_bounds();

        if !self.is_invincible() || flicker_visible(ticks_ms) {
            renderer.draw_image(ImageId::Player, bounds, !self.facing_right)?;
        }

        health_bar.render(renderer, bounds, self.health_percentage())
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y.round() as i32, self.width, self.height)
    }
}
