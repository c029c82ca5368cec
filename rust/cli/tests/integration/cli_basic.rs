use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_subcommands() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["solo", "multi", "rules", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should mention {cmd}");
    }
    assert!(res.stderr.is_empty());
}

#[test]
fn a2_version_prints_to_stdout() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("twentyone "));
}

#[test]
fn a3_unknown_subcommand_is_an_error() {
    let res = CliRunner::new().run(&["blackjack"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(!res.stderr.is_empty());
}

#[test]
fn a4_player_count_out_of_range_is_rejected() {
    for players in ["1", "16"] {
        let res = CliRunner::new().run(&["multi", "--players", players]);
        assert_eq!(res.exit_code, 2, "{players} players should be refused");
        assert!(res.stderr.contains("players"));
    }
}

#[test]
fn a5_rules_print_and_exit() {
    let res = CliRunner::new().run(&["rules"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Rules are as per follows:"));
    assert!(res.stdout.contains("If all players go bust, no one wins."));
}

#[test]
fn a6_binary_plays_from_piped_stdin() {
    let res = CliRunner::with_input("2\n2\n").run_binary(&[
        "multi",
        "--players",
        "2",
        "--seed",
        "1",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("The game is a draw! No one wins :("));
}
