// Game module - Contains all game logic and state management
//
// This module contains:
// - world.rs: GameWorld struct and entity management
// - session.rs: Session controller, input modes and overlays
// - types.rs: Shared constants, enums and helper structs

// Module declarations
pub mod session;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use session::Session;
pub use types::*;
pub use world::GameWorld;
