//! Test utilities & fixtures.
//! Every suite starts from the stock starter world and player kit.

use tilequest::command::Interpreter;
use tilequest::player::Player;
use tilequest::world::seed;
use tilequest::world::Map;

/// A fresh game at the village square with the standard starting kit.
pub fn new_game() -> (Interpreter, Player, Map) {
    (
        Interpreter::default(),
        seed::starting_player("Tess"),
        seed::starter_world(),
    )
}

/// Feed a sequence of input lines, returning the last response.
#[allow(dead_code)] // not every suite drives multi-step scripts
pub fn run_script(
    interpreter: &Interpreter,
    player: &mut Player,
    map: &mut Map,
    inputs: &[&str],
) -> String {
    let mut last = String::new();
    for input in inputs {
        last = interpreter.interpret(input, player, map);
    }
    last
}
