//! Turn dispatch: one line of input in, one response out.
//!
//! The interpreter owns no game state beyond the save path. It reads the
//! parsed [`Command`], pokes the player or the map, and hands back the text
//! to print. Tile events are matched by the first token only, in the order
//! they sit on the tile, and only while visible. Nothing in here panics or
//! errors on bad input; the worst case is the unknown-command message.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::logutil::escape_log;
use crate::player::Player;
use crate::save;
use crate::world::Map;

/// The fixed command table shown by `help`.
pub const DEFAULT_COMMANDS: &str = "     Command          Purpose

        w (↑)
  a (←) s (↓) d (→)       Movement

          help      Show the help menu
         map       Print the map
         supermap       Print all the map
          inv         Check inventory
        status         Show player status
      use [item]      Use the specified item
      drop [item]        Drop the specified item
     equip [item]      Equip the specified item
    unequip [item]    Unequip the specified item
         save              Save the game
         quit               Quit the game

  ";

/// Prefix of the tile-specific command list.
pub const SPECIAL_COMMANDS_HEADER: &str = "* Special commands: ";

/// Response when dropping an item the player does not carry.
pub const NO_ITEM_DROP_ERROR: &str = "You can't drop what you don't have!\n\n";

/// Response for input that matched nothing, fixed or tile-specific.
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "That isn't an available command at this time.\nType 'help' for a list of available commands.\n\n";

/// Dispatches parsed commands against the player and the map.
pub struct Interpreter {
    save_path: PathBuf,
}

impl Interpreter {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Run one line of player input and return the text to print.
    ///
    /// An exact `quit` (after lowercasing) returns an empty string and does
    /// nothing; noticing it is the caller's job. Successful movement also
    /// returns an empty string, and the caller decides whether to describe
    /// the new tile.
    pub fn interpret(&self, raw: &str, player: &mut Player, map: &mut Map) -> String {
        let command = Command::parse(raw);
        debug!("input '{}' parsed as {:?}", escape_log(raw), command);
        match command {
            Command::Quit => String::new(),
            Command::Move(direction) => player.step(direction, map),
            Command::Help => help(player, map),
            Command::Map => map.render(player.coords, false),
            Command::Supermap => map.render(player.coords, true),
            Command::Inventory => player.format_inventory(),
            Command::Status => player.format_status(),
            Command::Save => self.save(player, map),
            Command::Drop(name) => drop_item(player, &name),
            Command::Equip(name) => player.equip_item(&name),
            Command::Unequip(name) => player.unequip_item(&name),
            Command::Use(name) => player.use_item(&name),
            Command::Special(word) => run_tile_command(&word, player, map),
            Command::Empty => UNKNOWN_COMMAND_MESSAGE.to_string(),
        }
    }

    fn save(&self, player: &Player, map: &Map) -> String {
        match save::save_game(player, map, &self.save_path) {
            Ok(()) => "Game saved.\n\n".to_string(),
            Err(err) => {
                warn!("could not save to {}: {err}", self.save_path.display());
                format!("Could not save the game: {err}\n\n")
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(save::DEFAULT_SAVE_FILE)
    }
}

/// The help screen: the fixed table directly followed by the current tile's
/// special commands.
pub fn help(player: &Player, map: &Map) -> String {
    format!(
        "{}{}",
        DEFAULT_COMMANDS,
        display_special_commands(player, map)
    )
}

/// The `* Special commands: ` line for the player's tile, or an empty string
/// when the tile has no visible events.
pub fn display_special_commands(player: &Player, map: &Map) -> String {
    let Some(tile) = map.tile(player.coords) else {
        return String::new();
    };
    let visible: Vec<&str> = tile
        .events
        .iter()
        .filter(|event| event.visible)
        .map(|event| event.command.as_str())
        .collect();
    if visible.is_empty() {
        return String::new();
    }
    format!("{}{}\n\n", SPECIAL_COMMANDS_HEADER, visible.join(", "))
}

/// Minimap, tile description, and the tile's special commands.
pub fn describe_tile(player: &Player, map: &Map) -> String {
    let Some(tile) = map.tile(player.coords) else {
        return String::new();
    };
    format!(
        "{}\n{}\n\n{}",
        map.render_minimap(player.coords),
        tile.description,
        display_special_commands(player, map)
    )
}

fn drop_item(player: &mut Player, name: &str) -> String {
    let Some(index) = player.find_item(name) else {
        return NO_ITEM_DROP_ERROR.to_string();
    };
    let item = &player.inventory[index].item;
    if !item.disposable {
        return "You cannot drop that item.\n\n".to_string();
    }
    let display = item.name.clone();
    player.remove_item(index, 1);
    format!("You have dropped {display}.\n\n")
}

fn run_tile_command(word: &str, player: &mut Player, map: &mut Map) -> String {
    let Some(tile) = map.tile_mut(player.coords) else {
        return UNKNOWN_COMMAND_MESSAGE.to_string();
    };
    for event in tile.events.iter_mut() {
        if event.visible && event.command.eq_ignore_ascii_case(word) {
            return event.run(player);
        }
    }
    UNKNOWN_COMMAND_MESSAGE.to_string()
}
