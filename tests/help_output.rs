/// Integration tests for the help screen and tile descriptions.
mod common;

use common::new_game;
use tilequest::command::interpreter::{DEFAULT_COMMANDS, SPECIAL_COMMANDS_HEADER};
use tilequest::command::{describe_tile, display_special_commands, help};

#[test]
fn command_table_text_is_stable() {
    assert!(DEFAULT_COMMANDS.starts_with("     Command          Purpose\n\n"));
    assert!(DEFAULT_COMMANDS.contains("        w (↑)\n"));
    assert!(DEFAULT_COMMANDS.contains("  a (←) s (↓) d (→)       Movement\n"));
    assert!(DEFAULT_COMMANDS.contains("      use [item]      Use the specified item\n"));
    assert!(DEFAULT_COMMANDS.contains("    unequip [item]    Unequip the specified item\n"));
    // The table ends with a blank line and two spaces, no trailing newline.
    assert!(DEFAULT_COMMANDS.ends_with("         quit               Quit the game\n\n  "));
    assert_eq!(SPECIAL_COMMANDS_HEADER, "* Special commands: ");
}

#[test]
fn help_appends_special_commands_on_event_tiles() {
    let (interpreter, mut player, mut map) = new_game();
    let text = interpreter.interpret("help", &mut player, &mut map);
    assert!(text.starts_with(DEFAULT_COMMANDS));
    assert!(text.ends_with("* Special commands: read, talk\n\n"));
}

#[test]
fn help_is_just_the_table_on_plain_tiles() {
    let (interpreter, mut player, mut map) = new_game();
    // One step north is open meadow with no events.
    assert_eq!(interpreter.interpret("w", &mut player, &mut map), "");
    assert_eq!(help(&player, &map), DEFAULT_COMMANDS);
}

#[test]
fn special_commands_list_only_visible_events() {
    let (_, player, mut map) = new_game();
    assert_eq!(
        display_special_commands(&player, &map),
        "* Special commands: read, talk\n\n"
    );

    // Hide the first event; only the second remains listed.
    let tile = map.tile_mut(player.coords).expect("start tile");
    tile.events[0] = tile.events[0].clone().with_visible(false);
    assert_eq!(
        display_special_commands(&player, &map),
        "* Special commands: talk\n\n"
    );

    // Hide both and the line disappears entirely.
    let tile = map.tile_mut(player.coords).expect("start tile");
    tile.events[1] = tile.events[1].clone().with_visible(false);
    assert_eq!(display_special_commands(&player, &map), "");
}

#[test]
fn describe_tile_combines_minimap_description_and_commands() {
    let (_, player, map) = new_game();
    let text = describe_tile(&player, &map);
    assert!(text.contains('@'));
    assert!(text.contains("The village square of Greenhollow."));
    assert!(text.ends_with("* Special commands: read, talk\n\n"));
}

#[test]
fn describe_tile_without_events_ends_after_description() {
    let (interpreter, mut player, mut map) = new_game();
    interpreter.interpret("w", &mut player, &mut map);
    let text = describe_tile(&player, &map);
    assert!(text.ends_with("Tall grass sways around your boots.\n\n"));
}
