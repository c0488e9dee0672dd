//! The tile grid the game is played on.
//!
//! A [`Map`] is a rectangular grid of [`Tile`]s addressed by zero-based
//! [`Coordinates`]. Tiles remember whether the player has stood on them;
//! the `map` command only draws what has been seen, while `supermap` draws
//! everything. Rendering marks the player's cell with `@`.

use serde::{Deserialize, Serialize};
use std::ops::Range;

pub mod event;
pub mod seed;

pub use event::{Event, EventAction};

/// Zero-based row/column position on the grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring position one step away, or `None` at the grid edge.
    pub fn step(&self, direction: Direction) -> Option<Coordinates> {
        match direction {
            Direction::Up => self
                .row
                .checked_sub(1)
                .map(|row| Coordinates::new(row, self.col)),
            Direction::Down => Some(Coordinates::new(self.row + 1, self.col)),
            Direction::Left => self
                .col
                .checked_sub(1)
                .map(|col| Coordinates::new(self.row, col)),
            Direction::Right => Some(Coordinates::new(self.row, self.col + 1)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One cell of the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tile {
    /// Single character drawn on map renderings.
    pub glyph: char,
    pub description: String,
    pub passable: bool,
    /// Set once the player has stood here. Unseen tiles are blank on `map`.
    #[serde(default)]
    pub seen: bool,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Tile {
    pub fn new(glyph: char, description: &str) -> Self {
        Self {
            glyph,
            description: description.to_string(),
            passable: true,
            seen: false,
            events: Vec::new(),
        }
    }

    pub fn impassable(glyph: char, description: &str) -> Self {
        let mut tile = Self::new(glyph, description);
        tile.passable = false;
        tile
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

/// How far the minimap extends from the player in each direction.
pub const MINIMAP_RADIUS: usize = 2;

/// The rectangular tile grid, plus its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Map {
    pub name: String,
    pub tiles: Vec<Vec<Tile>>,
}

impl Map {
    pub fn new(name: &str, tiles: Vec<Vec<Tile>>) -> Self {
        Self {
            name: name.to_string(),
            tiles,
        }
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, |row| row.len())
    }

    pub fn in_bounds(&self, coords: Coordinates) -> bool {
        coords.row < self.rows() && coords.col < self.cols()
    }

    pub fn tile(&self, coords: Coordinates) -> Option<&Tile> {
        self.tiles.get(coords.row)?.get(coords.col)
    }

    pub fn tile_mut(&mut self, coords: Coordinates) -> Option<&mut Tile> {
        self.tiles.get_mut(coords.row)?.get_mut(coords.col)
    }

    pub fn mark_seen(&mut self, coords: Coordinates) {
        if let Some(tile) = self.tile_mut(coords) {
            tile.seen = true;
        }
    }

    /// Render the whole grid. Unseen tiles are blank unless `full` is set.
    pub fn render(&self, player_at: Coordinates, full: bool) -> String {
        let mut out = format!("=== {} ===\n\n", self.name);
        self.render_window(&mut out, 0..self.rows(), 0..self.cols(), player_at, full);
        out.push('\n');
        out
    }

    /// Render the window around the player, clamped to the map edges.
    /// Only seen tiles are drawn.
    pub fn render_minimap(&self, player_at: Coordinates) -> String {
        let row_start = player_at.row.saturating_sub(MINIMAP_RADIUS);
        let row_end = (player_at.row + MINIMAP_RADIUS + 1).min(self.rows());
        let col_start = player_at.col.saturating_sub(MINIMAP_RADIUS);
        let col_end = (player_at.col + MINIMAP_RADIUS + 1).min(self.cols());
        let mut out = String::new();
        self.render_window(
            &mut out,
            row_start..row_end,
            col_start..col_end,
            player_at,
            false,
        );
        out
    }

    fn render_window(
        &self,
        out: &mut String,
        rows: Range<usize>,
        cols: Range<usize>,
        player_at: Coordinates,
        full: bool,
    ) {
        for row in rows {
            for col in cols.clone() {
                let coords = Coordinates::new(row, col);
                let glyph = if coords == player_at {
                    '@'
                } else {
                    match self.tile(coords) {
                        Some(tile) if full || tile.seen => tile.glyph,
                        _ => ' ',
                    }
                };
                out.push(glyph);
                out.push(' ');
            }
            out.pop();
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> Map {
        Map::new(
            "Testland",
            vec![
                vec![
                    Tile::new('.', "a"),
                    Tile::new('.', "b"),
                    Tile::impassable('~', "c"),
                ],
                vec![
                    Tile::new('.', "d"),
                    Tile::new('.', "e"),
                    Tile::new('.', "f"),
                ],
            ],
        )
    }

    #[test]
    fn test_step_at_edges() {
        let origin = Coordinates::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Coordinates::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Coordinates::new(0, 1)));
    }

    #[test]
    fn test_bounds_and_lookup() {
        let map = two_by_three();
        assert_eq!(map.rows(), 2);
        assert_eq!(map.cols(), 3);
        assert!(map.in_bounds(Coordinates::new(1, 2)));
        assert!(!map.in_bounds(Coordinates::new(2, 0)));
        assert!(!map.in_bounds(Coordinates::new(0, 3)));
        assert!(map.tile(Coordinates::new(0, 2)).is_some());
        assert!(map.tile(Coordinates::new(2, 2)).is_none());
    }

    #[test]
    fn test_render_hides_unseen_tiles() {
        let mut map = two_by_three();
        map.mark_seen(Coordinates::new(0, 1));
        let out = map.render(Coordinates::new(0, 0), false);
        assert!(out.starts_with("=== Testland ===\n\n"));
        // Player marker, then the one seen tile; everything else blank.
        assert!(out.contains("@ .  \n"));
        assert!(out.contains("\n     \n"));
    }

    #[test]
    fn test_render_full_shows_everything() {
        let map = two_by_three();
        let out = map.render(Coordinates::new(1, 1), true);
        assert!(out.contains(". . ~\n"));
        assert!(out.contains(". @ .\n"));
    }

    #[test]
    fn test_minimap_clamps_to_edges() {
        let map = two_by_three();
        // Window around (0,0) is clamped to the existing 2x3 grid.
        let out = map.render_minimap(Coordinates::new(0, 0));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('@'));
    }

    #[test]
    fn test_mark_seen_out_of_bounds_is_ignored() {
        let mut map = two_by_three();
        map.mark_seen(Coordinates::new(9, 9));
        assert!(map.tiles.iter().flatten().all(|tile| !tile.seen));
    }
}
