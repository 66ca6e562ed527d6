//! Damage and invincibility
//!
//! A hit lowers health and opens a fixed invincibility window counted in
//! simulated frames. While the window is open further hits are blocked
//! entirely (not reduced).
//!
//! ```text
//!   Vulnerable --hit--> Invincible { frames_left: 60 }
//!   Invincible --tick x60--> Vulnerable
//! ```

/// Length of the invincibility window after a hit, in frames
pub const INVINCIBILITY_FRAMES: u32 = 60;

/// Source of damage for tracking and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Contact with a flying drone
    Drone,
}

/// A single damage event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    pub amount: i32,
    pub source: DamageSource,
}

impl DamageEvent {
    pub fn from_drone(amount: i32) -> Self {
        DamageEvent {
            amount,
            source: DamageSource::Drone,
        }
    }
}

/// Damage-eligibility state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Invincibility {
    #[default]
    Vulnerable,
    Invincible { frames_left: u32 },
}

impl Invincibility {
    pub fn is_active(&self) -> bool {
        matches!(self, Invincibility::Invincible { .. })
    }

    /// Opens a fresh window. Callers only do this on an accepted hit.
    pub fn trigger(&mut self) {
        *self = Invincibility::Invincible {
            frames_left: INVINCIBILITY_FRAMES,
        };
    }

    /// Advances the window by one frame, closing it when it runs out.
    pub fn tick(&mut self) {
        if let Invincibility::Invincible { frames_left } = self {
            *frames_left = frames_left.saturating_sub(1);
            if *frames_left == 0 {
                *self = Invincibility::Vulnerable;
            }
        }
    }

    pub fn frames_left(&self) -> u32 {
        match self {
            Invincibility::Vulnerable => 0,
            Invincibility::Invincible { frames_left } => *frames_left,
        }
    }
}

/// Flicker phase while invincible: visible for 100ms out of every 200ms.
///
/// Driven by wall-clock ticks, not by the invincibility counter.
pub fn flicker_visible(ticks_ms: u32) -> bool {
    ticks_ms % 200 < 100
}
