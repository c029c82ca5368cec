//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use twentyone_engine::rules::{MAX_PLAYERS, MIN_PLAYERS};

/// Twenty One: roll dice, get as close to 21 as you dare.
///
/// Without a subcommand the interactive main menu is shown.
#[derive(Parser, Debug)]
#[command(name = "twentyone", version)]
pub struct TwentyOneCli {
    /// Seed for the dice; the same seed replays the same rolls
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Milliseconds the CPU player "thinks" before each move
    #[arg(long, global = true)]
    pub cpu_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play against the CPU player
    Solo,
    /// Local multiplayer at one keyboard
    Multi {
        /// Number of players
        #[arg(
            long,
            short = 'p',
            value_parser = clap::value_parser!(u8).range((MIN_PLAYERS as i64)..=(MAX_PLAYERS as i64))
        )]
        players: u8,
    },
    /// Print the rules
    Rules,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = TwentyOneCli::try_parse_from(["twentyone"]).unwrap();
        assert_eq!(cli.cmd, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            TwentyOneCli::try_parse_from(["twentyone", "solo", "--seed", "9", "--cpu-delay-ms", "0"])
                .unwrap();
        assert_eq!(cli.cmd, Some(Commands::Solo));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.cpu_delay_ms, Some(0));
    }

    #[test]
    fn player_count_is_bounded() {
        for bad in ["1", "16", "0", "x"] {
            assert!(
                TwentyOneCli::try_parse_from(["twentyone", "multi", "--players", bad]).is_err(),
                "{bad} should be rejected"
            );
        }
        for good in ["2", "15"] {
            let cli =
                TwentyOneCli::try_parse_from(["twentyone", "multi", "-p", good]).unwrap();
            assert!(matches!(cli.cmd, Some(Commands::Multi { .. })));
        }
    }

    #[test]
    fn players_flag_is_required() {
        assert!(TwentyOneCli::try_parse_from(["twentyone", "multi"]).is_err());
    }
}
