use crate::assets::ImageId;
use crate::collision::Collidable;
use crate::game::GREEN;
use crate::render::Renderer;
use rand::Rng;
use sdl2::rect::Rect;

/// Contact damage dealt by every drone
pub const DRONE_DAMAGE: i32 = 10;
/// Chance that a freshly spawned drone carries a fish
pub const REWARD_CHANCE: f64 = 0.3;
const MIN_SPEED: f32 = 1.5;
const MAX_SPEED: f32 = 3.5;
const REWARD_MARKER_SIZE: u32 = 10;

/// Stable identity of a drone, used to refer to the hack target without
/// holding a reference into the drone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DroneId(pub u64);

/// A flying enemy crossing the screen right to left
#[derive(Debug, Clone)]
pub struct Drone {
    pub id: DroneId,
    pub x: f32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Drawn once at spawn, constant afterwards
    pub speed: f32,
    pub has_fish: bool,
    pub damage: i32,
}

impl Drone {
    /// Spawns a drone centred on (center_x, center_y).
    pub fn new(id: DroneId, center_x: i32, center_y: i32, size: (u32, u32), rng: &mut impl Rng) -> Self {
        let (width, height) = size;
        Drone {
            id,
            x: (center_x - width as i32 / 2) as f32,
            y: center_y - height as i32 / 2,
            width,
            height,
            speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
            has_fish: rng.gen_bool(REWARD_CHANCE),
            damage: DRONE_DAMAGE,
        }
    }

    /// Moves the drone left. Returns true once it has fully left the screen.
    pub fn update(&mut self) -> bool {
        self.x -= self.speed;
        self.right() < 0
    }

    pub fn right(&self) -> i32 {
        self.x as i32 + self.width as i32
    }

    pub fn center(&self) -> (i32, i32) {
        let bounds = self.get_bounds();
        (bounds.center().x(), bounds.center().y())
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        let bounds = self.get_bounds();
        renderer.draw_image(ImageId::Drone, bounds, false)?;

        if self.has_fish {
            let marker = Rect::new(
                bounds.center().x() - REWARD_MARKER_SIZE as i32 / 2,
                bounds.y() - 15,
                REWARD_MARKER_SIZE,
                REWARD_MARKER_SIZE,
            );
            renderer.fill_rect(marker, GREEN, 0)?;
        }

        Ok(())
    }
}

impl Collidable for Drone {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x as i32, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{DrawCall, RecordingRenderer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_draws_speed_and_reward_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut with_fish = 0;

        for i in 0..1000 {
            let drone = Drone::new(DroneId(i), 1340, 300, (20, 20), &mut rng);
            assert!((MIN_SPEED..MAX_SPEED).contains(&drone.speed));
            assert_eq!(drone.damage, DRONE_DAMAGE);
            if drone.has_fish {
                with_fish += 1;
            }
        }

        // 30% of 1000 with generous slack
        assert!((200..400).contains(&with_fish), "{} carried fish", with_fish);
    }

    #[test]
    fn test_spawn_is_centred() {
        let mut rng = StdRng::seed_from_u64(1);
        let drone = Drone::new(DroneId(0), 100, 200, (20, 30), &mut rng);
        assert_eq!(drone.center(), (100, 200));
    }

    #[test]
    fn test_moves_left_until_offscreen() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut drone = Drone::new(DroneId(0), 30, 100, (20, 20), &mut rng);
        let speed = drone.speed;
        let start = drone.x;

        assert!(!drone.update());
        assert_eq!(drone.x, start - speed);

        let mut frames = 1;
        while !drone.update() {
            frames += 1;
            assert!(frames < 1000);
        }
        assert!(drone.right() < 0);
    }

    #[test]
    fn test_reward_marker_only_when_carrying() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut drone = Drone::new(DroneId(0), 500, 300, (20, 20), &mut rng);

        drone.has_fish = false;
        let mut renderer = RecordingRenderer::default();
        drone.render(&mut renderer).expect("render");
        assert_eq!(renderer.calls.len(), 1);

        drone.has_fish = true;
        let mut renderer = RecordingRenderer::default();
        drone.render(&mut renderer).expect("render");
        assert!(matches!(renderer.calls[1], DrawCall::Fill(_, GREEN)));
    }
}
