//! Save/Load system
//!
//! Persists the player's progression between sessions:
//! - JSON save file (human-readable, debuggable)
//! - Missing or corrupt files fall back to defaults, never to an error
//!
//! # Architecture
//!
//! - `types`: the save record, upgrade levels and error type
//! - `manager`: SaveManager for file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let save_manager = SaveManager::new(config.save_path());
//!
//! let record = save_manager.load_or_default();
//! let session = Session::new(&record, sizes, &mut rng);
//! // ...
//! save_manager.save_or_warn(&session.snapshot());
//! ```

pub mod manager;
pub mod types;

pub use manager::SaveManager;
pub use types::*;
