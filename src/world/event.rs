//! Tile events: the commands a tile offers beyond the fixed vocabulary.

use serde::{Deserialize, Serialize};

use crate::item::ItemStack;
use crate::player::Player;

/// What happens when an event runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// One-shot loot container. Hides its own event once opened.
    Chest { loot: Vec<ItemStack>, gold: u32 },
    /// Somebody with something to say. Repeatable.
    Dialogue { speaker: String, lines: Vec<String> },
    /// Restores up to `recovery` HP per drink. Repeatable.
    Fountain { recovery: u32 },
    /// A fixed inscription. Repeatable.
    Sign { text: String },
}

/// A word the player can type while standing on the event's tile.
///
/// Events run in the order they are stored on the tile; the first visible
/// event whose command matches the input wins. Hidden events are neither
/// listed by `help` nor matched by input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub command: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub action: EventAction,
}

fn default_visible() -> bool {
    true
}

impl Event {
    pub fn new(command: &str, action: EventAction) -> Self {
        Self {
            command: command.to_string(),
            visible: true,
            action,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Run the event against the player, returning the text to show.
    ///
    /// Visibility changes are the event's own business. The interpreter only
    /// reads `visible`; a chest that has been emptied hides itself here.
    pub fn run(&mut self, player: &mut Player) -> String {
        match &mut self.action {
            EventAction::Chest { loot, gold } => {
                if loot.is_empty() && *gold == 0 {
                    self.visible = false;
                    return "The chest is empty.\n\n".to_string();
                }
                let mut found: Vec<String> = Vec::new();
                for stack in loot.drain(..) {
                    if stack.count > 1 {
                        found.push(format!("{} x{}", stack.item.name, stack.count));
                    } else {
                        found.push(stack.item.name.clone());
                    }
                    player.add_item(stack.item, stack.count);
                }
                if *gold > 0 {
                    found.push(format!("{} gold", gold));
                    player.gold += *gold;
                    *gold = 0;
                }
                self.visible = false;
                format!("You open the chest and find {}.\n\n", found.join(", "))
            }
            EventAction::Dialogue { speaker, lines } => {
                let mut out = String::new();
                for line in lines.iter() {
                    out.push_str(speaker);
                    out.push_str(": ");
                    out.push_str(line);
                    out.push('\n');
                }
                out.push('\n');
                out
            }
            EventAction::Fountain { recovery } => {
                let healed = player.heal(*recovery);
                if healed == 0 {
                    "You drink from the fountain, but you are already at full health.\n\n"
                        .to_string()
                } else {
                    format!("You drink from the fountain and recover {healed} HP.\n\n")
                }
            }
            EventAction::Sign { text } => format!("The sign reads: \"{text}\"\n\n"),
        }
    }
}
