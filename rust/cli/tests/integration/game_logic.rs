use crate::helpers::cli_runner::CliRunner;
use crate::helpers::{FAST, lines};

fn multi(players: &str) -> Vec<&str> {
    let mut args = vec!["multi", "--players", players];
    args.extend_from_slice(&FAST);
    args
}

#[test]
fn b1_everyone_staying_is_a_draw() {
    let res = CliRunner::with_input(&lines("2", 4)).run(&multi("4"));
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("-----------Round 1-----------"), 1);
    assert_eq!(res.count("Round 2"), 0);
    assert_eq!(res.count("has stayed with a score of 0"), 4);
    assert!(res.stdout.ends_with("The game is a draw! No one wins :(\n"));
}

#[test]
fn b2_always_rolling_busts_everyone() {
    // Every roll adds at least 2, so 11 rolls each is always enough to bust
    let res = CliRunner::with_input(&lines("1", 40)).run(&multi("3"));
    assert_eq!(res.exit_code, 0);
    for p in 1..=3 {
        assert!(res.stdout.contains(&format!("Player {p} goes bust!")));
    }
    assert!(res.stdout.ends_with("Everyone's gone bust! No one wins :(\n"));
}

#[test]
fn b3_rolling_once_beats_staying_on_zero() {
    // Player 1 rolls, Player 2 stays, then Player 1 stays
    let res = CliRunner::with_input("1\n2\n2\n").run(&multi("2"));
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Rolling both..."));
    assert!(res.stdout.contains("-----------Round 2-----------"));
    assert!(res.stdout.contains("Player 2 is at 0"));
    // Stayed once in round 1 and repeated when skipped in round 2
    assert_eq!(res.count("Player 2 has stayed with a score of 0"), 2);
    assert!(res.stdout.ends_with("Player 1 is the winner!\n"));
}

#[test]
fn b4_single_die_not_accepted_below_fourteen() {
    let res = CliRunner::with_input("3\n2\n2\n").run(&multi("2"));
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("Please enter an option: "), 3);
    assert!(!res.stdout.contains("3. Roll One"));
    assert!(!res.stdout.contains("Rolling one..."));
}

#[test]
fn b5_same_seed_same_game() {
    let input = lines("1", 40);
    let first = CliRunner::with_input(&input).run(&multi("2"));
    let second = CliRunner::with_input(&input).run(&multi("2"));
    assert_eq!(first.exit_code, 0);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn b6_closed_input_leaves_the_game() {
    let res = CliRunner::with_input("1\n").run(&multi("2"));
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.ends_with("Player 2 left the game.\n"));
    assert!(!res.stdout.contains("winner"));
    assert!(res.stderr.is_empty());
}

#[test]
fn b7_solo_cpu_plays_out_alone() {
    let mut args = vec!["solo"];
    args.extend_from_slice(&FAST);
    let res = CliRunner::with_input("2\n").run(&args);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("Please enter an option: "), 1);
    assert!(res.stdout.contains("------------CPU Player's turn------------"));
    assert!(res.stdout.contains("CPU Player is now on"));

    let cpu_stayed = res.stdout.contains("CPU Player has stayed with a score of");
    let cpu_bust = res.stdout.contains("CPU Player goes bust!");
    assert!(cpu_stayed ^ cpu_bust);
    if cpu_bust {
        assert!(res.stdout.ends_with("Player 1 is the winner!\n"));
    } else {
        assert!(res.stdout.ends_with("CPU Player is the winner!\n"));
    }
}

#[test]
fn b8_undecodable_input_is_asked_again() {
    let res = CliRunner::with_bytes(b"\xff\xfe\n2\n2\n").run(&multi("2"));
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.count("Please enter an option: "), 3);
    assert!(!res.stdout.contains("left the game"));
    assert!(res.stdout.ends_with("The game is a draw! No one wins :(\n"));
}
