use crate::collision::{Collidable, aabb_intersect};
use crate::game::{GRAY, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::Renderer;
use rand::Rng;
use sdl2::rect::Rect;

pub const FLOOR_HEIGHT: u32 = 40;
pub const PLATFORM_HEIGHT: u32 = 20;
pub const EXTRA_PLATFORMS: usize = 5;
const MIN_WIDTH: u32 = 150;
const MAX_WIDTH: u32 = 300;
/// Horizontal margin kept free at both screen edges
const SIDE_MARGIN: i32 = 50;

/// A static box the player can stand on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Platform {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Platform { x, y, width, height }
    }

    /// The full-width floor along the bottom of the screen
    pub fn floor() -> Self {
        Platform::new(
            0,
            (SCREEN_HEIGHT - FLOOR_HEIGHT) as i32,
            SCREEN_WIDTH,
            FLOOR_HEIGHT,
        )
    }

    pub fn is_floor(&self) -> bool {
        self.x == 0 && self.width == SCREEN_WIDTH && self.bottom() == SCREEN_HEIGHT as i32
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.fill_rect(self.get_bounds(), GRAY, 0)
    }
}

impl Collidable for Platform {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Builds the level: the floor plus five non-overlapping platforms in the
/// lower half of the screen.
///
/// Each slot retries random candidates until one fits; the layout space is
/// large enough that this terminates quickly in practice.
pub fn generate_platforms(rng: &mut impl Rng) -> Vec<Platform> {
    let mut platforms = vec![Platform::floor()];

    for _ in 0..EXTRA_PLATFORMS {
        loop {
            let width = rng.gen_range(MIN_WIDTH..=MAX_WIDTH);
            let x = rng.gen_range(SIDE_MARGIN..=SCREEN_WIDTH as i32 - width as i32 - SIDE_MARGIN);
            let y = rng.gen_range(SCREEN_HEIGHT as i32 / 2..=SCREEN_HEIGHT as i32 - 100);
            let candidate = Platform::new(x, y, width, PLATFORM_HEIGHT);

            let bounds = candidate.get_bounds();
            let intersects = platforms
                .iter()
                .any(|placed| aabb_intersect(&bounds, &placed.get_bounds()));

            if !intersects {
                platforms.push(candidate);
                break;
            }
        }
    }

    platforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_layouts_never_overlap() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let platforms = generate_platforms(&mut rng);

            assert_eq!(platforms.len(), 1 + EXTRA_PLATFORMS);
            for (i, a) in platforms.iter().enumerate() {
                for b in platforms.iter().skip(i + 1) {
                    assert!(
                        !aabb_intersect(&a.get_bounds(), &b.get_bounds()),
                        "seed {}: {:?} overlaps {:?}",
                        seed,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_full_width_floor() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let platforms = generate_platforms(&mut rng);

            let floors: Vec<_> = platforms.iter().filter(|p| p.width == SCREEN_WIDTH).collect();
            assert_eq!(floors.len(), 1);
            assert!(floors[0].is_floor());
            assert!(platforms[0].is_floor());
        }
    }

    #[test]
    fn test_platforms_within_lower_half() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for platform in generate_platforms(&mut rng).iter().skip(1) {
                assert!((MIN_WIDTH..=MAX_WIDTH).contains(&platform.width));
                assert_eq!(platform.height, PLATFORM_HEIGHT);
                assert!(platform.y >= SCREEN_HEIGHT as i32 / 2);
                assert!(platform.y <= SCREEN_HEIGHT as i32 - 100);
                assert!(platform.x >= SIDE_MARGIN);
                assert!(platform.x + platform.width as i32 <= SCREEN_WIDTH as i32 - SIDE_MARGIN);
            }
        }
    }
}
