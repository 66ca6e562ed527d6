//! In-world HUD Components
//!
//! Stateless rendering helpers drawn every frame during a session, beneath
//! the modal overlays:
//!
//! - [`HealthBar`] - health above the player
//! - [`hud`] - fish counter panel and controls hint

pub mod health_bar;
pub mod hud;

pub use health_bar::HealthBar;
