//! The player's command vocabulary.
//!
//! One line of input becomes exactly one [`Command`]. Matching order is part
//! of the contract:
//!
//! 1. the whole lowercased line equals `quit` (no trimming),
//! 2. multi-word item verbs (`drop`/`equip`/`unequip`/`use` plus a name),
//! 3. single-word builtins, matched against the whole line (so stray
//!    whitespace defeats them),
//! 4. otherwise the first token is a candidate for the current tile's
//!    special commands.
//!
//! A bare `drop` with no name is therefore not the drop verb; it can only
//! match a tile event named `drop`.

use crate::world::Direction;

pub mod interpreter;

pub use interpreter::{describe_tile, display_special_commands, help, Interpreter};

/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exact lowercased line `quit`. Never dispatched; the caller decides
    /// what quitting means.
    Quit,
    Move(Direction),
    Help,
    Map,
    Supermap,
    Inventory,
    Status,
    Save,
    Drop(String),
    Equip(String),
    Unequip(String),
    Use(String),
    /// First token of a line that matched nothing fixed; tried against the
    /// current tile's events.
    Special(String),
    /// A line with no tokens at all.
    Empty,
}

impl Command {
    /// Classify one raw input line. Never fails; anything unmatched becomes
    /// [`Command::Special`] or [`Command::Empty`].
    pub fn parse(raw: &str) -> Command {
        let line = raw.to_lowercase();
        if line == "quit" {
            return Command::Quit;
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        if words.len() > 1 {
            let name = words[1..].join(" ");
            match words[0] {
                "drop" => return Command::Drop(name),
                "equip" => return Command::Equip(name),
                "unequip" => return Command::Unequip(name),
                "use" => return Command::Use(name),
                _ => {}
            }
        }

        match line.as_str() {
            "w" => return Command::Move(Direction::Up),
            "a" => return Command::Move(Direction::Left),
            "s" => return Command::Move(Direction::Down),
            "d" => return Command::Move(Direction::Right),
            "help" => return Command::Help,
            "map" => return Command::Map,
            "supermap" => return Command::Supermap,
            "inv" => return Command::Inventory,
            "status" => return Command::Status,
            "save" => return Command::Save,
            _ => {}
        }

        match words.first() {
            Some(first) => Command::Special((*first).to_string()),
            None => Command::Empty,
        }
    }
}
