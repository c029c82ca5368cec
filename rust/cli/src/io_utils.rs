//! Console input helpers.

use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input. A line that is not valid UTF-8 is
/// decoded lossily so that callers treat it like any other unrecognised entry.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Ok(Some(String))` - Trimmed input line (may be empty after trimming)
/// * `Ok(None)` - EOF
/// * `Err(_)` - The underlying reader failed
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use twentyone_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  2 \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("2".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut raw = Vec::new();
    if stdin.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    let line = match String::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => {
            tracing::debug!(error = %e.utf8_error(), "input is not valid UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(Some(line.trim().to_string()))
}
