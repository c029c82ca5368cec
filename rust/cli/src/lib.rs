//! # Twenty One CLI Library
//!
//! This library provides the console front end for the Twenty One dice game:
//! the interactive main menu, the game subcommands and the renderer that turns
//! engine events into text.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments, resolves configuration and executes the appropriate command.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new("4\n");
//! let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
//! let code = twentyone_cli::run(["twentyone"], &mut input, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("1. Solo"));
//! ```
//!
//! ## Available Subcommands
//!
//! - (none): Interactive main menu
//! - `solo`: One game against the CPU player
//! - `multi --players N`: One local multiplayer game for N players (2-15)
//! - `rules`: Print the rules
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

mod exit_code;
#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
pub mod console;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod prompt;
pub mod ui;
pub mod validation;
pub mod view;

use cli::{Commands, TwentyOneCli};
use commands::{
    handle_cfg_command, handle_menu_command, handle_play_command, handle_rules_command,
};
pub use error::CliError;
use twentyone_engine::game::GameMode;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `input` - Input stream for menu and turn choices (typically locked `stdin`)
/// * `out` - Output stream for the game display (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success (including running out of input), `2` for errors
pub fn run<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TwentyOneCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };
    debug!(?cli, "parsed arguments");

    match dispatch(cli, input, out) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cli: TwentyOneCli,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let (seed, cpu_delay_ms) = (cli.seed, cli.cpu_delay_ms);
    let resolve =
        || config::load_with_sources().map(|resolved| resolved.with_overrides(seed, cpu_delay_ms));

    match cli.cmd {
        None => handle_menu_command(&resolve()?.config, input, out),
        Some(Commands::Solo) => {
            handle_play_command(GameMode::Solo, &resolve()?.config, input, out)
        }
        Some(Commands::Multi { players }) => handle_play_command(
            GameMode::Multiplayer(usize::from(players)),
            &resolve()?.config,
            input,
            out,
        ),
        Some(Commands::Rules) => handle_rules_command(out),
        Some(Commands::Cfg) => handle_cfg_command(&resolve()?, out),
    }
}
