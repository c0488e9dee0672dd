//! Versioned JSON save files.
//!
//! A save is one pretty-printed JSON document holding the player and the
//! world they were standing in. The world travels with the player so that
//! seen tiles and already-opened chests survive a reload.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::GameError;
use crate::player::Player;
use crate::world::Map;

pub const SAVE_SCHEMA_VERSION: u8 = 1;
pub const DEFAULT_SAVE_FILE: &str = "player.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveFile {
    pub schema_version: u8,
    pub saved_at: DateTime<Utc>,
    pub player: Player,
    pub world: Map,
}

pub fn save_game(player: &Player, world: &Map, path: &Path) -> Result<(), GameError> {
    let save = SaveFile {
        schema_version: SAVE_SCHEMA_VERSION,
        saved_at: Utc::now(),
        player: player.clone(),
        world: world.clone(),
    };
    let serialized = serde_json::to_string_pretty(&save)?;
    fs::write(path, serialized)?;
    info!("saved game to {}", path.display());
    Ok(())
}

pub fn load_game(path: &Path) -> Result<SaveFile, GameError> {
    let raw = fs::read_to_string(path)?;
    let save: SaveFile = serde_json::from_str(&raw)?;
    if save.schema_version != SAVE_SCHEMA_VERSION {
        return Err(GameError::SchemaMismatch {
            expected: SAVE_SCHEMA_VERSION,
            found: save.schema_version,
        });
    }
    Ok(save)
}
