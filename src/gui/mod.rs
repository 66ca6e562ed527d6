//! Screen-Space GUI System
//!
//! Modal overlays drawn on top of the world at fixed screen positions. Each
//! overlay builds its buttons once and keeps them for both drawing and
//! hit-testing.
//!
//! # Available Components
//!
//! - [`button::Button`] - rounded clickable button with hover colour
//! - [`MainMenu`] - title screen with the saved record
//! - [`PauseMenu`] - continue / shop / exit to menu
//! - [`Shop`] - upgrade purchases
//! - [`HackingGame`] - code-entry minigame against a drone
//!
//! # Example Usage
//!
//! ```ignore
//! let mut pause_menu = PauseMenu::new();
//!
//! pause_menu.update_hover(input.mouse);
//! if let Some(PauseOption::Shop) = pause_menu.handle_click(click) {
//!     // open the shop
//! }
//!
//! pause_menu.render(renderer, player.fish_count)?;
//! ```

pub mod button;
pub mod hacking;
pub mod main_menu;
pub mod pause_menu;
pub mod shop;

pub use hacking::{HackOutcome, HackingGame};
pub use main_menu::{MainMenu, MainMenuOption};
pub use pause_menu::{PauseMenu, PauseOption};
pub use shop::{Shop, ShopAction};
