use crate::assets::ImageId;
use crate::collision::Collidable;
use crate::render::Renderer;
use sdl2::rect::Rect;

/// Frames a reward stays in the world before disappearing
pub const FISH_LIFETIME: u32 = 180;
/// The reward flickers once fewer than this many frames are left
pub const BLINK_THRESHOLD: u32 = 60;
const BLINK_CYCLE: u32 = 10;

/// A fish dropped by a successfully hacked drone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FishReward {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub lifetime: u32,
    blink_timer: u32,
}

impl FishReward {
    pub fn new(center_x: i32, center_y: i32, size: (u32, u32)) -> Self {
        let (width, height) = size;
        FishReward {
            x: center_x - width as i32 / 2,
            y: center_y - height as i32 / 2,
            width,
            height,
            lifetime: FISH_LIFETIME,
            blink_timer: 0,
        }
    }

    /// Ages the reward by one frame. Returns true once it has expired.
    pub fn update(&mut self) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.blink_timer = (self.blink_timer + 1) % BLINK_CYCLE;
        self.lifetime == 0
    }

    /// Steady until the last 60 frames, then visible for half of each blink cycle
    pub fn is_visible(&self) -> bool {
        self.lifetime > BLINK_THRESHOLD || self.blink_timer < BLINK_CYCLE / 2
    }

    pub fn center(&self) -> (i32, i32) {
        let center = self.get_bounds().center();
        (center.x(), center.y())
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        if self.is_visible() {
            renderer.draw_image(ImageId::Fish, self.get_bounds(), false)?;
        }
        Ok(())
    }
}

impl Collidable for FishReward {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_lifetime() {
        let mut fish = FishReward::new(100, 100, (25, 25));

        for _ in 0..FISH_LIFETIME - 1 {
            assert!(!fish.update());
        }
        assert!(fish.update());
        assert_eq!(fish.lifetime, 0);
    }

    #[test]
    fn test_steady_before_final_third() {
        let mut fish = FishReward::new(100, 100, (25, 25));

        while fish.lifetime > BLINK_THRESHOLD {
            assert!(fish.is_visible());
            fish.update();
        }
    }

    #[test]
    fn test_blinks_in_final_third() {
        let mut fish = FishReward::new(100, 100, (25, 25));
        while fish.lifetime > BLINK_THRESHOLD {
            fish.update();
        }

        let mut visible = 0;
        let mut hidden = 0;
        for _ in 0..BLINK_THRESHOLD - 1 {
            fish.update();
            if fish.is_visible() {
                visible += 1;
            } else {
                hidden += 1;
            }
        }

        assert!(visible > 0);
        assert!(hidden > 0);
    }

    #[test]
    fn test_centred_on_spawn_point() {
        let fish = FishReward::new(300, 200, (24, 24));
        assert_eq!(fish.center(), (300, 200));
    }
}
