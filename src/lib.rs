//! # Tilequest - a turn-based tile-map text adventure
//!
//! Tilequest is a single-player terminal adventure. Each turn the player
//! types one line; the command interpreter classifies it against a fixed
//! vocabulary (movement, maps, inventory, saving) and the current tile's
//! own special commands, then dispatches exactly one action.
//!
//! ## Features
//!
//! - **One-line turns**: `w`/`a`/`s`/`d` movement, `help`, `map`/`supermap`,
//!   `inv`, `status`, `save`, `quit`, and the item verbs `use`/`drop`/
//!   `equip`/`unequip [item]`.
//! - **Tile events**: chests, signs, fountains, and people live on tiles and
//!   add their own commands while you stand there.
//! - **Fog of war**: `map` draws only where you have been; `supermap` shows
//!   everything.
//! - **JSON saves**: one versioned, human-readable save file carrying the
//!   player and the world.
//! - **TOML configuration** with validation, and TTY-aware logging.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tilequest::command::Interpreter;
//! use tilequest::world::seed;
//!
//! let interpreter = Interpreter::default();
//! let mut player = seed::starting_player("Wanderer");
//! let mut map = seed::starter_world();
//!
//! let response = interpreter.interpret("help", &mut player, &mut map);
//! print!("{response}");
//! ```
//!
//! ## Module Organization
//!
//! - [`command`] - input classification and turn dispatch
//! - [`world`] - the tile grid, events, and the starter world
//! - [`player`] - stats, movement, inventory, and equipment
//! - [`item`] - items and item stacks
//! - [`save`] - versioned JSON save files
//! - [`config`] - TOML configuration and validation
//! - [`game`] - the interactive read-interpret-print loop
//! - [`errors`] - error types for the fallible edges

pub mod command;
pub mod config;
pub mod errors;
pub mod game;
pub mod item;
pub mod logutil;
pub mod player;
pub mod save;
pub mod world;
