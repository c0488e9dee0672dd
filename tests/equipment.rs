/// Integration tests for equip/unequip/use flowing through the interpreter.
mod common;

use common::new_game;

#[test]
fn equip_and_unequip_round_trip() {
    let (interpreter, mut player, mut map) = new_game();
    let base_defense = player.defense_power();

    assert_eq!(
        interpreter.interpret("equip leather cap", &mut player, &mut map),
        "You have equipped the leather cap.\n\n"
    );
    assert_eq!(player.defense_power(), base_defense + 1);
    assert!(!player.has_item("leather cap"));

    let status = interpreter.interpret("status", &mut player, &mut map);
    assert!(status.contains("Helmet: leather cap\n"));

    assert_eq!(
        interpreter.interpret("unequip leather cap", &mut player, &mut map),
        "You have unequipped the leather cap.\n\n"
    );
    assert_eq!(player.defense_power(), base_defense);
    assert!(player.has_item("leather cap"));
}

#[test]
fn equip_failures_are_messages_not_errors() {
    let (interpreter, mut player, mut map) = new_game();
    assert_eq!(
        interpreter.interpret("equip bread", &mut player, &mut map),
        "You can't equip the bread.\n\n"
    );
    assert_eq!(
        interpreter.interpret("equip halberd", &mut player, &mut map),
        "You can't equip what you don't have!\n\n"
    );
    assert_eq!(
        interpreter.interpret("unequip leather cap", &mut player, &mut map),
        "You don't have that equipped.\n\n"
    );
}

#[test]
fn using_food_heals_and_consumes_through_the_interpreter() {
    let (interpreter, mut player, mut map) = new_game();
    player.hp = 20;

    assert_eq!(
        interpreter.interpret("use bread", &mut player, &mut map),
        "You eat the bread and recover 5 HP.\n\n"
    );
    assert_eq!(player.hp, 25);
    assert_eq!(player.item_count("bread"), 1);

    assert_eq!(
        interpreter.interpret("use old locket", &mut player, &mut map),
        "Nothing happens.\n\n"
    );
    assert!(player.has_item("old locket"));

    assert_eq!(
        interpreter.interpret("use elixir", &mut player, &mut map),
        "You can't use what you don't have!\n\n"
    );
}

#[test]
fn inventory_listing_tracks_equipment_moves() {
    let (interpreter, mut player, mut map) = new_game();
    let before = interpreter.interpret("inv", &mut player, &mut map);
    assert!(before.contains("leather cap\n"));

    interpreter.interpret("equip leather cap", &mut player, &mut map);
    let after = interpreter.interpret("inv", &mut player, &mut map);
    assert!(!after.contains("leather cap\n"));
    assert!(after.contains("bread x2\n"));
}
