use crate::helpers::FAST;
use crate::helpers::cli_runner::CliRunner;

const MENU_HEADER: &str = "------------Main Menu------------";

#[test]
fn c1_exit_from_menu() {
    let res = CliRunner::with_input("4\n").run(&[]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count(MENU_HEADER), 1);
    assert!(res.stdout.contains("4. Exit"));
}

#[test]
fn c2_menu_ignores_garbage() {
    let res = CliRunner::with_input("hello\n9\n-1\n4\n").run(&[]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("Choose from the following options: "), 4);
    assert_eq!(res.count(MENU_HEADER), 1);
}

#[test]
fn c3_rules_wait_then_return() {
    let res = CliRunner::with_input("3\n\n4\n").run(&[]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Press enter to go back"));
    assert_eq!(res.count(MENU_HEADER), 2);
}

#[test]
fn c4_solo_game_returns_to_menu() {
    let res = CliRunner::with_input("1\n2\n4\n").run(&FAST);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("is the winner!"));
    assert_eq!(res.count(MENU_HEADER), 2);
}

#[test]
fn c5_multiplayer_from_menu() {
    let res = CliRunner::with_input("2\n20\n3\n2\n2\n2\n4\n").run(&FAST);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("Number of players: "), 2);
    assert!(res.stdout.contains("Player 3 is at 0"));
    assert!(res.stdout.contains("The game is a draw! No one wins :("));
}

#[test]
fn c6_eof_anywhere_exits_cleanly() {
    for input in ["", "2\n", "1\n", "3\n"] {
        let res = CliRunner::with_input(input).run(&FAST);
        assert_eq!(res.exit_code, 0, "input {input:?}");
        assert!(res.stderr.is_empty(), "input {input:?}: {}", res.stderr);
    }
}

#[test]
fn c7_undecodable_menu_choice_is_asked_again() {
    let res = CliRunner::with_bytes(b"\xc3\x28\n3\n\n4\n").run(&[]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("Choose from the following options: "), 3);
    assert!(res.stdout.contains("Press enter to go back"));
    assert_eq!(res.count(MENU_HEADER), 2);
}
