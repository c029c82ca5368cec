//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: `CliRunner` drives `twentyone_cli::run` in process with
//!   scripted stdin, or the built binary through a pipe, and captures exit
//!   code, stdout and stderr.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let res = CliRunner::with_input("2\n2\n").run(&["multi", "--players", "2"]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;

/// Flags that make games instant and reproducible.
#[allow(dead_code)]
pub const FAST: [&str; 4] = ["--cpu-delay-ms", "0", "--seed", "2024"];

/// `line` repeated `n` times, one per input line.
#[allow(dead_code)]
pub fn lines(line: &str, n: usize) -> String {
    format!("{line}\n").repeat(n)
}
