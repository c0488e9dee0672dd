//! Inventory operations.
//!
//! Stacks are kept in acquisition order and matched by name, ignoring ASCII
//! case. An empty stack is removed rather than left at zero.

use super::Player;
use crate::item::{Item, ItemStack};

impl Player {
    /// Index of the stack whose item name matches, ignoring ASCII case.
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.inventory
            .iter()
            .position(|stack| stack.item.name.eq_ignore_ascii_case(name))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    pub fn item_count(&self, name: &str) -> u32 {
        self.find_item(name)
            .map_or(0, |index| self.inventory[index].count)
    }

    /// Add items, stacking with an existing entry of the same name.
    pub fn add_item(&mut self, item: Item, count: u32) {
        if count == 0 {
            return;
        }
        match self.find_item(&item.name) {
            Some(index) => self.inventory[index].count += count,
            None => self.inventory.push(ItemStack::new(item, count)),
        }
    }

    /// Remove up to `count` items from the stack at `index`.
    pub fn remove_item(&mut self, index: usize, count: u32) {
        if let Some(stack) = self.inventory.get_mut(index) {
            stack.count = stack.count.saturating_sub(count);
            if stack.count == 0 {
                self.inventory.remove(index);
            }
        }
    }

    pub fn format_inventory(&self) -> String {
        let mut out = String::from("=== Inventory ===\n");
        out.push_str(&format!("Gold: {}\n", self.gold));
        if self.inventory.is_empty() {
            out.push_str("(empty)\n");
        } else {
            for stack in &self.inventory {
                if stack.count > 1 {
                    out.push_str(&format!("{} x{}\n", stack.item.name, stack.count));
                } else {
                    out.push_str(&stack.item.name);
                    out.push('\n');
                }
            }
        }
        out.push('\n');
        out
    }
}
