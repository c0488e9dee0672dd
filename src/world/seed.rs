//! The built-in starter world: the village of Greenhollow and its
//! surroundings. New games and most integration tests start here.

use crate::item::{Item, ItemStack};
use crate::player::Player;
use crate::world::{Coordinates, Event, EventAction, Map, Tile};

/// Where new games begin: the village square.
pub const START: Coordinates = Coordinates { row: 2, col: 2 };

/// Tile legend: `#` pines (impassable), `~` lake (impassable), `+` village
/// square, `.` meadow.
const LAYOUT: [&str; 6] = [
    "########",
    "#...~~.#",
    "#.+....#",
    "#...#..#",
    "#...#..#",
    "########",
];

const CHEST_AT: Coordinates = Coordinates { row: 4, col: 5 };
const FOUNTAIN_AT: Coordinates = Coordinates { row: 4, col: 6 };

pub fn starter_world() -> Map {
    let tiles = LAYOUT
        .iter()
        .map(|line| line.chars().map(tile_for).collect())
        .collect();
    let mut map = Map::new("Greenhollow", tiles);

    place_event(
        &mut map,
        START,
        Event::new(
            "read",
            EventAction::Sign {
                text: "Welcome to Greenhollow. Mind the lake.".to_string(),
            },
        ),
    );
    place_event(
        &mut map,
        START,
        Event::new(
            "talk",
            EventAction::Dialogue {
                speaker: "Maren".to_string(),
                lines: vec![
                    "Saw you come down the north road.".to_string(),
                    "There's an old chest past the pines, if the damp hasn't ruined it."
                        .to_string(),
                ],
            },
        ),
    );
    place_event(
        &mut map,
        CHEST_AT,
        Event::new(
            "open",
            EventAction::Chest {
                loot: vec![ItemStack::new(rusty_sword(), 1)],
                gold: 30,
            },
        ),
    );
    place_event(
        &mut map,
        FOUNTAIN_AT,
        Event::new("drink", EventAction::Fountain { recovery: 10 }),
    );

    map.mark_seen(START);
    map
}

pub fn starting_player(name: &str) -> Player {
    let mut player = Player::new(name, START);
    player.add_item(bread(), 2);
    player.add_item(leather_cap(), 1);
    player.add_item(old_locket(), 1);
    player
}

fn tile_for(glyph: char) -> Tile {
    match glyph {
        '#' => Tile::impassable('#', "The pines grow too close together to pass."),
        '~' => Tile::impassable('~', "Cold lake water laps at the shore."),
        '+' => Tile::new(
            '+',
            "The village square of Greenhollow. A mossy signpost leans beside the well.",
        ),
        _ => Tile::new('.', "Tall grass sways around your boots."),
    }
}

fn place_event(map: &mut Map, coords: Coordinates, event: Event) {
    if let Some(tile) = map.tile_mut(coords) {
        tile.events.push(event);
    }
}

fn bread() -> Item {
    Item::food("bread", "A dense loaf that keeps well on the road.", 5)
}

fn rusty_sword() -> Item {
    Item::weapon("rusty sword", "Pitted, but it still holds an edge.", 3)
}

fn leather_cap() -> Item {
    Item::helmet("leather cap", "Better than nothing.", 1)
}

fn old_locket() -> Item {
    Item::curio(
        "old locket",
        "It will not open, and you cannot bring yourself to part with it.",
    )
    .with_disposable(false)
}
