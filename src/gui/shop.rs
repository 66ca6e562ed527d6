//! Upgrade Shop
//!
//! Three independent upgrade tracks bought with fish. Each purchase raises the
//! item's level and grows its cost by half (rounded down). Item levels start
//! from the player's persisted upgrades, with costs replaying that growth.

use super::button::Button;
use crate::game::{DARK_BLUE, OVERLAY, PURPLE, RED, SCREEN_HEIGHT, SCREEN_WIDTH, WHITE, YELLOW};
use crate::player::Player;
use crate::render::{Renderer, centered_text_x};
use crate::save::{UpgradeKind, Upgrades};
use sdl2::rect::Rect;
use std::fmt;
use tracing::{debug, info};

const ITEM_TOP: i32 = 200;
const ITEM_SPACING: i32 = 80;

/// Why a purchase was refused. A refused purchase changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    InsufficientFish { cost: u32, available: u32 },
    MaxLevel { level: u32 },
    UnknownItem { index: usize },
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PurchaseError::InsufficientFish { cost, available } => {
                write!(f, "Not enough fish: need {}, have {}", cost, available)
            }
            PurchaseError::MaxLevel { level } => write!(f, "Already at max level {}", level),
            PurchaseError::UnknownItem { index } => write!(f, "No shop item at index {}", index),
        }
    }
}

impl std::error::Error for PurchaseError {}

/// Result of a click on the shop screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    Back,
    Purchased(UpgradeKind),
    Rejected(PurchaseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItem {
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub cost: u32,
    pub level: u32,
    pub max_level: u32,
    pub effect: &'static str,
}

impl ShopItem {
    /// Item at `level`, with the cost it has after that many purchases.
    pub fn new(kind: UpgradeKind, level: u32) -> Self {
        let (name, base_cost, effect) = match kind {
            UpgradeKind::Speed => ("SPEED BOOST", 5, "+2 MOVE SPEED"),
            UpgradeKind::Jump => ("JUMP BOOST", 5, "+3 JUMP POWER"),
            UpgradeKind::DoubleJump => ("DOUBLE JUMP", 10, "ONE EXTRA JUMP IN THE AIR"),
        };
        let max_level = kind.max_level();
        let level = level.min(max_level);
        let cost = (0..level).fold(base_cost, |cost, _| grown_cost(cost));

        ShopItem {
            kind,
            name,
            cost,
            level,
            max_level,
            effect,
        }
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }

    pub fn label(&self) -> String {
        format!("{} - {} FISH", self.name, self.cost)
    }
}

/// Cost after one purchase: x1.5, rounded down
pub fn grown_cost(cost: u32) -> u32 {
    cost * 3 / 2
}

pub struct Shop {
    items: Vec<ShopItem>,
    item_buttons: Vec<Button>,
    back_button: Button,
}

impl Shop {
    pub fn new(upgrades: &Upgrades) -> Self {
        let items: Vec<ShopItem> = UpgradeKind::ALL
            .iter()
            .map(|kind| ShopItem::new(*kind, upgrades.level(*kind)))
            .collect();

        let x = SCREEN_WIDTH as i32 / 2 - 150;
        let item_buttons = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let y = ITEM_TOP + index as i32 * ITEM_SPACING;
                Button::new(Rect::new(x, y, 300, 50), item.label(), PURPLE, DARK_BLUE).with_text_scale(2)
            })
            .collect();

        let back_button = Button::new(
            Rect::new(SCREEN_WIDTH as i32 / 2 - 100, SCREEN_HEIGHT as i32 - 100, 200, 50),
            "BACK",
            RED,
            PURPLE,
        );

        Shop {
            items,
            item_buttons,
            back_button,
        }
    }

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    /// Buys item `index` for the player.
    ///
    /// On success the cost is deducted, the item's level and cost grow and the
    /// upgrade takes effect on the player at once.
    pub fn purchase(&mut self, index: usize, player: &mut Player) -> Result<UpgradeKind, PurchaseError> {
        let Some(item) = self.items.get_mut(index) else {
            return Err(PurchaseError::UnknownItem { index });
        };

        if item.is_maxed() {
            return Err(PurchaseError::MaxLevel { level: item.level });
        }
        if player.fish_count < item.cost {
            return Err(PurchaseError::InsufficientFish {
                cost: item.cost,
                available: player.fish_count,
            });
        }

        player.fish_count -= item.cost;
        item.level += 1;
        item.cost = grown_cost(item.cost);
        player.apply_upgrade(item.kind);

        if let Some(button) = self.item_buttons.get_mut(index) {
            button.set_label(item.label());
        }

        info!(upgrade = ?item.kind, level = item.level, next_cost = item.cost, "upgrade purchased");
        Ok(item.kind)
    }

    pub fn update_hover(&mut self, mouse: (i32, i32)) {
        for button in &mut self.item_buttons {
            button.update_hover(mouse);
        }
        self.back_button.update_hover(mouse);
    }

    /// Routes a click to the back button or an item button
    pub fn handle_click(&mut self, click: (i32, i32), player: &mut Player) -> Option<ShopAction> {
        if self.back_button.is_clicked(click) {
            return Some(ShopAction::Back);
        }

        let index = self.item_buttons.iter().position(|button| button.is_clicked(click))?;
        match self.purchase(index, player) {
            Ok(kind) => Some(ShopAction::Purchased(kind)),
            Err(err) => {
                debug!(%err, "purchase rejected");
                Some(ShopAction::Rejected(err))
            }
        }
    }

    pub fn item_button_rect(&self, index: usize) -> Option<Rect> {
        self.item_buttons.get(index).map(|button| button.rect)
    }

    pub fn back_button_rect(&self) -> Rect {
        self.back_button.rect
    }

    pub fn render(&self, renderer: &mut dyn Renderer, fish_count: u32) -> Result<(), String> {
        renderer.overlay(OVERLAY)?;

        let center_x = SCREEN_WIDTH as i32 / 2;
        renderer.draw_text("SHOP", centered_text_x("SHOP", center_x, 6), 60, WHITE, 6)?;

        let fish = format!("FISH: {}", fish_count);
        renderer.draw_text(&fish, centered_text_x(&fish, center_x, 3), 130, YELLOW, 3)?;

        for (index, (item, button)) in self.items.iter().zip(&self.item_buttons).enumerate() {
            button.render(renderer)?;

            let y = ITEM_TOP + index as i32 * ITEM_SPACING;
            let level = format!("LV {}/{}", item.level, item.max_level);
            renderer.draw_text(&level, center_x + 160, y + 15, WHITE, 3)?;
            renderer.draw_text(item.effect, center_x - 140, y + 55, WHITE, 2)?;
        }

        self.back_button.render(renderer)
    }
}
