//! Items the player can carry, equip, and use.

use serde::{Deserialize, Serialize};

/// What an item does when used or equipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Restores HP when used.
    Food { recovery: u32 },
    /// Adds to attack while equipped.
    Weapon { attack: u32 },
    /// Adds to defense while equipped.
    Helmet { defense: u32 },
    /// No effect when used.
    Curio,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    /// Items marked non-disposable refuse to be dropped.
    pub disposable: bool,
    /// Consumable items are spent when used.
    pub consumable: bool,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: &str, description: &str, kind: ItemKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            disposable: true,
            consumable: false,
            kind,
        }
    }

    pub fn food(name: &str, description: &str, recovery: u32) -> Self {
        Self::new(name, description, ItemKind::Food { recovery }).with_consumable(true)
    }

    pub fn weapon(name: &str, description: &str, attack: u32) -> Self {
        Self::new(name, description, ItemKind::Weapon { attack })
    }

    pub fn helmet(name: &str, description: &str, defense: u32) -> Self {
        Self::new(name, description, ItemKind::Helmet { defense })
    }

    pub fn curio(name: &str, description: &str) -> Self {
        Self::new(name, description, ItemKind::Curio)
    }

    pub fn with_disposable(mut self, disposable: bool) -> Self {
        self.disposable = disposable;
        self
    }

    pub fn with_consumable(mut self, consumable: bool) -> Self {
        self.consumable = consumable;
        self
    }

    pub fn is_equipment(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Weapon { .. } | ItemKind::Helmet { .. }
        )
    }
}

/// A number of identical items carried or stored together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemStack {
    pub item: Item,
    pub count: u32,
}

impl ItemStack {
    pub fn new(item: Item, count: u32) -> Self {
        Self { item, count }
    }
}
