//! Player state: stats, position, inventory, and equipment.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemKind, ItemStack};
use crate::world::{Coordinates, Direction, Map};

pub mod inventory;

/// Response when a move is blocked by terrain or the map edge.
pub const BLOCKED_PATH_MESSAGE: &str = "You can't move that way.\n\n";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(default)]
    pub gold: u32,
    pub coords: Coordinates,
    #[serde(default)]
    pub inventory: Vec<ItemStack>,
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub helmet: Option<Item>,
}

impl Player {
    pub fn new(name: &str, coords: Coordinates) -> Self {
        Self {
            name: name.to_string(),
            hp: 30,
            max_hp: 30,
            attack: 4,
            defense: 2,
            gold: 0,
            coords,
            inventory: Vec::new(),
            weapon: None,
            helmet: None,
        }
    }

    /// Attack including the equipped weapon's bonus.
    pub fn attack_power(&self) -> u32 {
        let bonus = match &self.weapon {
            Some(Item {
                kind: ItemKind::Weapon { attack },
                ..
            }) => *attack,
            _ => 0,
        };
        self.attack + bonus
    }

    /// Defense including the equipped helmet's bonus.
    pub fn defense_power(&self) -> u32 {
        let bonus = match &self.helmet {
            Some(Item {
                kind: ItemKind::Helmet { defense },
                ..
            }) => *defense,
            _ => 0,
        };
        self.defense + bonus
    }

    /// Restore up to `amount` HP, returning how much was actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp.saturating_sub(self.hp));
        self.hp += healed;
        healed
    }

    /// Walk one tile. Returns the blocked message, or an empty string on
    /// success; describing the new tile is the caller's job.
    pub fn step(&mut self, direction: Direction, map: &mut Map) -> String {
        let target = match self.coords.step(direction) {
            Some(target) if map.in_bounds(target) => target,
            _ => return BLOCKED_PATH_MESSAGE.to_string(),
        };
        match map.tile(target) {
            Some(tile) if tile.passable => {
                self.coords = target;
                map.mark_seen(target);
                String::new()
            }
            _ => BLOCKED_PATH_MESSAGE.to_string(),
        }
    }

    /// Move an inventory item into its equipment slot, swapping out whatever
    /// was there.
    pub fn equip_item(&mut self, name: &str) -> String {
        let Some(index) = self.find_item(name) else {
            return "You can't equip what you don't have!\n\n".to_string();
        };
        let item = self.inventory[index].item.clone();
        let slot = match item.kind {
            ItemKind::Weapon { .. } => &mut self.weapon,
            ItemKind::Helmet { .. } => &mut self.helmet,
            _ => return format!("You can't equip the {}.\n\n", item.name),
        };
        let previous = slot.replace(item.clone());
        self.remove_item(index, 1);
        if let Some(previous) = previous {
            self.add_item(previous, 1);
        }
        format!("You have equipped the {}.\n\n", item.name)
    }

    /// Return an equipped item to the inventory.
    pub fn unequip_item(&mut self, name: &str) -> String {
        let from_weapon = self
            .weapon
            .as_ref()
            .map_or(false, |item| item.name.eq_ignore_ascii_case(name));
        let from_helmet = !from_weapon
            && self
                .helmet
                .as_ref()
                .map_or(false, |item| item.name.eq_ignore_ascii_case(name));
        let taken = if from_weapon {
            self.weapon.take()
        } else if from_helmet {
            self.helmet.take()
        } else {
            None
        };
        match taken {
            Some(item) => {
                let display = item.name.clone();
                self.add_item(item, 1);
                format!("You have unequipped the {display}.\n\n")
            }
            None => "You don't have that equipped.\n\n".to_string(),
        }
    }

    /// Use an inventory item on yourself.
    pub fn use_item(&mut self, name: &str) -> String {
        let Some(index) = self.find_item(name) else {
            return "You can't use what you don't have!\n\n".to_string();
        };
        let item = self.inventory[index].item.clone();
        match item.kind {
            ItemKind::Food { recovery } => {
                let healed = self.heal(recovery);
                if item.consumable {
                    self.remove_item(index, 1);
                }
                format!("You eat the {} and recover {} HP.\n\n", item.name, healed)
            }
            _ => "Nothing happens.\n\n".to_string(),
        }
    }

    pub fn format_status(&self) -> String {
        let weapon = self
            .weapon
            .as_ref()
            .map_or("none", |item| item.name.as_str());
        let helmet = self
            .helmet
            .as_ref()
            .map_or("none", |item| item.name.as_str());
        let mut out = format!("=== {} ===\n", self.name);
        out.push_str(&format!("HP: {}/{}\n", self.hp, self.max_hp));
        out.push_str(&format!("Attack: {}\n", self.attack_power()));
        out.push_str(&format!("Defense: {}\n", self.defense_power()));
        out.push_str(&format!("Gold: {}\n", self.gold));
        out.push_str(&format!("Weapon: {weapon}\n"));
        out.push_str(&format!("Helmet: {helmet}\n"));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Tile;

    fn open_field() -> Map {
        let row = || vec![Tile::new('.', "field"), Tile::new('.', "field")];
        Map::new("Field", vec![row(), row()])
    }

    fn test_player() -> Player {
        Player::new("Tess", Coordinates::new(0, 0))
    }

    #[test]
    fn test_step_moves_and_marks_seen() {
        let mut map = open_field();
        let mut player = test_player();
        let response = player.step(Direction::Down, &mut map);
        assert_eq!(response, "");
        assert_eq!(player.coords, Coordinates::new(1, 0));
        assert!(map.tile(player.coords).unwrap().seen);
    }

    #[test]
    fn test_step_blocked_by_edge_and_terrain() {
        let mut map = open_field();
        map.tiles[0][1] = Tile::impassable('~', "water");
        let mut player = test_player();

        assert_eq!(player.step(Direction::Up, &mut map), BLOCKED_PATH_MESSAGE);
        assert_eq!(
            player.step(Direction::Right, &mut map),
            BLOCKED_PATH_MESSAGE
        );
        assert_eq!(player.coords, Coordinates::new(0, 0));
    }

    #[test]
    fn test_equip_swaps_with_inventory() {
        let mut player = test_player();
        player.add_item(Item::weapon("rusty sword", "Pitted.", 3), 1);
        player.add_item(Item::weapon("pike", "Long.", 5), 1);

        let response = player.equip_item("Rusty Sword");
        assert_eq!(response, "You have equipped the rusty sword.\n\n");
        assert_eq!(player.attack_power(), player.attack + 3);
        assert!(!player.has_item("rusty sword"));

        // Equipping another weapon returns the first to the inventory.
        player.equip_item("pike");
        assert_eq!(player.attack_power(), player.attack + 5);
        assert!(player.has_item("rusty sword"));
    }

    #[test]
    fn test_equip_rejects_non_equipment_and_missing() {
        let mut player = test_player();
        player.add_item(Item::curio("pebble", "Round."), 1);
        assert_eq!(
            player.equip_item("pebble"),
            "You can't equip the pebble.\n\n"
        );
        assert_eq!(
            player.equip_item("halberd"),
            "You can't equip what you don't have!\n\n"
        );
    }

    #[test]
    fn test_unequip_returns_item() {
        let mut player = test_player();
        player.add_item(Item::helmet("leather cap", "Snug.", 1), 1);
        player.equip_item("leather cap");
        assert_eq!(player.defense_power(), player.defense + 1);

        let response = player.unequip_item("LEATHER CAP");
        assert_eq!(response, "You have unequipped the leather cap.\n\n");
        assert_eq!(player.defense_power(), player.defense);
        assert!(player.has_item("leather cap"));

        assert_eq!(
            player.unequip_item("leather cap"),
            "You don't have that equipped.\n\n"
        );
    }

    #[test]
    fn test_use_food_heals_and_consumes() {
        let mut player = test_player();
        player.hp = 10;
        player.add_item(Item::food("bread", "A loaf.", 5), 2);

        let response = player.use_item("bread");
        assert_eq!(response, "You eat the bread and recover 5 HP.\n\n");
        assert_eq!(player.hp, 15);
        assert_eq!(player.item_count("bread"), 1);
    }

    #[test]
    fn test_use_food_caps_at_max_hp() {
        let mut player = test_player();
        player.hp = player.max_hp - 2;
        player.add_item(Item::food("bread", "A loaf.", 5), 1);
        let response = player.use_item("bread");
        assert_eq!(response, "You eat the bread and recover 2 HP.\n\n");
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_use_non_food_does_nothing() {
        let mut player = test_player();
        player.add_item(Item::curio("pebble", "Round."), 1);
        assert_eq!(player.use_item("pebble"), "Nothing happens.\n\n");
        assert!(player.has_item("pebble"));
        assert_eq!(
            player.use_item("ghost"),
            "You can't use what you don't have!\n\n"
        );
    }

    #[test]
    fn test_status_shows_equipment_bonuses() {
        let mut player = test_player();
        player.add_item(Item::weapon("rusty sword", "Pitted.", 3), 1);
        player.equip_item("rusty sword");
        let status = player.format_status();
        assert!(status.starts_with("=== Tess ===\n"));
        assert!(status.contains(&format!("Attack: {}\n", player.attack + 3)));
        assert!(status.contains("Weapon: rusty sword\n"));
        assert!(status.contains("Helmet: none\n"));
        assert!(status.ends_with("\n\n"));
    }
}
