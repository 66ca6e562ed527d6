//! Save data types
//!
//! The progression record is a single small JSON object:
//!
//! ```json
//! { "fish": 12, "upgrades": { "speed": 1, "jump": 0, "double_jump": 1 }, "health": 80 }
//! ```
//!
//! plus an optional `saved_at` timestamp written by the save manager.

use serde::{Deserialize, Serialize};

pub const MAX_HEALTH: i32 = 100;

/// The three permanent upgrade tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    Speed,
    Jump,
    DoubleJump,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [UpgradeKind::Speed, UpgradeKind::Jump, UpgradeKind::DoubleJump];

    pub fn max_level(&self) -> u32 {
        match self {
            UpgradeKind::Speed | UpgradeKind::Jump => 3,
            UpgradeKind::DoubleJump => 1,
        }
    }
}

/// Purchased upgrade levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrades {
    pub speed: u32,
    pub jump: u32,
    pub double_jump: u32,
}

impl Upgrades {
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Speed => self.speed,
            UpgradeKind::Jump => self.jump,
            UpgradeKind::DoubleJump => self.double_jump,
        }
    }

    pub fn level_mut(&mut self, kind: UpgradeKind) -> &mut u32 {
        match kind {
            UpgradeKind::Speed => &mut self.speed,
            UpgradeKind::Jump => &mut self.jump,
            UpgradeKind::DoubleJump => &mut self.double_jump,
        }
    }

    /// Caps every level at its track's maximum
    pub fn clamped(mut self) -> Self {
        for kind in UpgradeKind::ALL {
            let level = self.level_mut(kind);
            *level = (*level).min(kind.max_level());
        }
        self
    }
}

/// The persisted progression snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(default)]
    pub fish: u32,
    #[serde(default)]
    pub upgrades: Upgrades,
    #[serde(default = "full_health")]
    pub health: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

fn full_health() -> i32 {
    MAX_HEALTH
}

impl Default for SaveRecord {
    fn default() -> Self {
        SaveRecord {
            fish: 0,
            upgrades: Upgrades::default(),
            health: MAX_HEALTH,
            saved_at: None,
        }
    }
}

impl SaveRecord {
    /// Brings a loaded record back into the valid range.
    ///
    /// Health is clamped to 0..=100 and a depleted snapshot (written on
    /// defeat) starts the next session at full health.
    pub fn sanitized(mut self) -> Self {
        self.upgrades = self.upgrades.clamped();
        self.health = self.health.clamp(0, MAX_HEALTH);
        if self.health == 0 {
            self.health = MAX_HEALTH;
        }
        self
    }
}

/// Error types for save/load operations
#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    CorruptedData(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            SaveError::CorruptedData(msg) => write!(f, "Corrupted save data: {}", msg),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::IoError(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::SerializationError(err)
    }
}
