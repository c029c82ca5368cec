//! The terminal a game is played on.
//!
//! A game has one reader and one writer but several users of them: the
//! renderer and every human seat's prompt. They share a [`Console`] through a
//! `RefCell`; the game loop is single threaded and never holds a borrow across
//! a call into another user.

use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, parse_choice};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut (dyn Write + 'a) {
        &mut *self.out
    }

    /// Next trimmed line of input, or `None` once input is closed.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        read_stdin_line(&mut *self.input)
    }

    /// Asks until one of `allowed` is entered.
    ///
    /// Anything else is dropped without comment and the prompt is shown again.
    /// Returns `Ok(None)` when input runs out.
    pub fn prompt_int(&mut self, prompt: &str, allowed: &[u32]) -> io::Result<Option<u32>> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                // Keep the transcript tidy when input ends mid-prompt
                writeln!(self.out)?;
                return Ok(None);
            };
            match parse_choice(&line, allowed) {
                ParseResult::Choice(n) => return Ok(Some(n)),
                ParseResult::Invalid(reason) => debug!(%reason, "prompt input rejected"),
            }
        }
    }

    /// Shows `prompt` and waits for any line, including an empty one.
    pub fn pause(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        if self.read_line()?.is_none() {
            writeln!(self.out)?;
        }
        Ok(())
    }
}
