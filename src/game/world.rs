// GameWorld struct and entity management
//
// This module contains the GameWorld struct which owns all game entities and world state.
// It spawns and prunes drones and rewards, and resolves player contact with both.

use crate::assets::ImageId;
use crate::audio::{Audio, SoundId};
use crate::collision::overlaps;
use crate::combat::DamageEvent;
use crate::drone::{Drone, DroneId};
use crate::fish_reward::FishReward;
use crate::platform::{Platform, generate_platforms};
use crate::player::Player;
use crate::render::Renderer;
use crate::save::SaveRecord;
use crate::ui::HealthBar;
use rand::Rng;
use sdl2::rect::Rect;
use tracing::debug;

use super::{EntitySizes, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Per-frame chance of a new drone while below the cap
pub const SPAWN_CHANCE: f64 = 0.01;
/// Drones allowed at once before any speed upgrades
pub const BASE_DRONE_CAP: usize = 2;
/// Drones appear this far beyond the right edge
const SPAWN_OFFSET_X: i32 = 100;
const SPAWN_MIN_Y: i32 = 100;
const SPAWN_BOTTOM_MARGIN: i32 = 200;

/// GameWorld encapsulates all game entities and world state
/// This struct owns all the game objects that exist in the world
pub struct GameWorld {
    pub player: Player,
    pub platforms: Vec<Platform>,
    /// In spawn order; this order breaks ties between overlapping drones
    pub drones: Vec<Drone>,
    pub fishes: Vec<FishReward>,
    sizes: EntitySizes,
    next_drone_id: u64,
}

impl GameWorld {
    /// Builds a fresh level around a player restored from `record`.
    pub fn new(record: &SaveRecord, sizes: EntitySizes, rng: &mut impl Rng) -> Self {
        GameWorld {
            player: Player::from_record(record, sizes.player),
            platforms: generate_platforms(rng),
            drones: Vec::new(),
            fishes: Vec::new(),
            sizes,
            next_drone_id: 0,
        }
    }

    /// More speed means more drones
    pub fn drone_cap(&self) -> usize {
        BASE_DRONE_CAP + self.player.upgrades.speed as usize
    }

    pub fn has_drone(&self, id: DroneId) -> bool {
        self.drones.iter().any(|drone| drone.id == id)
    }

    /// Spawns a drone centred on the given point
    pub fn spawn_drone_at(&mut self, center_x: i32, center_y: i32, rng: &mut impl Rng) -> DroneId {
        let id = DroneId(self.next_drone_id);
        self.next_drone_id += 1;

        let drone = Drone::new(id, center_x, center_y, self.sizes.drone, rng);
        debug!(id = id.0, speed = drone.speed, has_fish = drone.has_fish, "drone spawned");
        self.drones.push(drone);
        id
    }

    /// Rolls for a new drone off the right edge of the screen
    pub fn maybe_spawn_drone(&mut self, rng: &mut impl Rng) -> Option<DroneId> {
        if self.drones.len() >= self.drone_cap() || !rng.gen_bool(SPAWN_CHANCE) {
            return None;
        }

        let x = SCREEN_WIDTH as i32 + SPAWN_OFFSET_X;
        let y = rng.gen_range(SPAWN_MIN_Y..=SCREEN_HEIGHT as i32 - SPAWN_BOTTOM_MARGIN);
        Some(self.spawn_drone_at(x, y, rng))
    }

    /// Moves drones, drops the ones that left the screen and resolves contact.
    ///
    /// While hacking, drones keep flying but neither hurt the player nor
    /// change the hack target. Otherwise the target is recomputed from
    /// scratch: the last overlapping drone wins, and only the first one to
    /// touch a vulnerable player deals damage.
    pub fn update_drones(&mut self, audio: &mut dyn Audio) {
        let hacking = self.player.hacking;
        if !hacking {
            self.player.target_drone = None;
        }

        let player = &mut self.player;
        self.drones.retain_mut(|drone| {
            if drone.update() {
                debug!(id = drone.id.0, "drone left the screen");
                return false;
            }

            if !hacking && overlaps(&*player, &*drone) {
                player.target_drone = Some(drone.id);
                if player.take_damage(DamageEvent::from_drone(drone.damage)) {
                    audio.play_sound(SoundId::Damage);
                }
            }
            true
        });
    }

    /// Ages rewards and collects the ones the player touches
    pub fn update_fishes(&mut self) {
        let player = &mut self.player;
        self.fishes.retain_mut(|fish| {
            if fish.update() {
                debug!("fish reward expired");
                return false;
            }

            if overlaps(&*player, &*fish) {
                player.fish_count += 1;
                debug!(fish = player.fish_count, "fish collected");
                return false;
            }
            true
        });
    }

    /// Removes a hacked drone, leaving its fish behind if it carried one.
    ///
    /// Returns true if a reward was spawned.
    pub fn complete_hack(&mut self, id: DroneId) -> bool {
        let Some(index) = self.drones.iter().position(|drone| drone.id == id) else {
            return false;
        };

        let drone = self.drones.remove(index);
        if !drone.has_fish {
            return false;
        }

        let (center_x, center_y) = drone.center();
        self.fishes.push(FishReward::new(center_x, center_y, self.sizes.fish));
        debug!(id = id.0, "fish reward spawned");
        true
    }

    /// One simulation frame: physics, spawning, drones, rewards
    pub fn step(&mut self, rng: &mut impl Rng, audio: &mut dyn Audio) {
        self.player.update(&self.platforms);
        self.maybe_spawn_drone(rng);
        self.update_drones(audio);
        self.update_fishes();
    }

    /// Draws the world back to front
    pub fn render(&self, renderer: &mut dyn Renderer, health_bar: &HealthBar, ticks_ms: u32) -> Result<(), String> {
        renderer.draw_image(ImageId::Background, Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT), false)?;

        for platform in &self.platforms {
            platform.render(renderer)?;
        }
        for drone in &self.drones {
            drone.render(renderer)?;
        }
        for fish in &self.fishes {
            fish.render(renderer)?;
        }

        self.player.render(renderer, health_bar, ticks_ms)
    }
}
