//! Dice and option formatters for terminal display.
//!
//! This module provides pure functions for drawing dice faces and turn
//! options. It draws boxed dice with Unicode line art, falling back to plain
//! ASCII for terminal environments that don't support Unicode rendering.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module detects whether the terminal supports Unicode symbols by
//! checking environment variables on Windows (WT_SESSION, TERM_PROGRAM,
//! VSCODE_INJECTION) and assumes Unicode support on Unix-like systems.
//!
//! ## Example
//!
//! ```rust
//! use twentyone_cli::formatters::format_dice;
//!
//! let art = format_dice(&[3], false);
//! assert_eq!(art.lines().count(), 5);
//! assert!(art.contains("|    o    |"));
//! ```

use twentyone_engine::dice::{MAX_FACE, MIN_FACE};
use twentyone_engine::player::PlayerAction;

/// Height of one drawn die in lines.
pub const DIE_HEIGHT: usize = 5;

// Offsets of the left, centre and right pips inside the die's border.
const PIP_COLUMNS: [usize; 3] = [2, 4, 6];

/// Check if the terminal supports Unicode box drawing by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

// Pip rows for each face: which of the left, centre and right columns are set.
fn pip_rows(face: u8) -> [[bool; 3]; 3] {
    const NONE: [bool; 3] = [false, false, false];
    const LEFT: [bool; 3] = [true, false, false];
    const MID: [bool; 3] = [false, true, false];
    const RIGHT: [bool; 3] = [false, false, true];
    const BOTH: [bool; 3] = [true, false, true];

    match face.clamp(MIN_FACE, MAX_FACE) {
        1 => [NONE, MID, NONE],
        2 => [LEFT, NONE, RIGHT],
        3 => [LEFT, MID, RIGHT],
        4 => [BOTH, NONE, BOTH],
        5 => [BOTH, MID, BOTH],
        _ => [BOTH, BOTH, BOTH],
    }
}

/// Draw a single die face as five lines of text.
///
/// # Example
///
/// ```rust
/// # use twentyone_cli::formatters::die_face;
/// let lines = die_face(6, true);
/// assert_eq!(lines[0], "┌─────────┐");
/// assert_eq!(lines[2], "│  ●   ●  │");
/// ```
pub fn die_face(face: u8, unicode: bool) -> [String; DIE_HEIGHT] {
    let (top, bottom, side, pip) = if unicode {
        ("┌─────────┐", "└─────────┘", '│', '●')
    } else {
        ("+---------+", "+---------+", '|', 'o')
    };

    let row = |cols: [bool; 3]| {
        let mut inner = [' '; 9];
        for (on, at) in cols.into_iter().zip(PIP_COLUMNS) {
            if on {
                inner[at] = pip;
            }
        }
        let mut line = String::with_capacity(11);
        line.push(side);
        line.extend(inner);
        line.push(side);
        line
    };

    let [r1, r2, r3] = pip_rows(face);
    [
        top.to_string(),
        row(r1),
        row(r2),
        row(r3),
        bottom.to_string(),
    ]
}

/// Draw several dice stacked vertically, one face after another.
pub fn format_dice(faces: &[u8], unicode: bool) -> String {
    let mut art = String::new();
    for &face in faces {
        for line in die_face(face, unicode) {
            art.push_str(&line);
            art.push('\n');
        }
    }
    art
}

/// Format a turn option the way the console lists it, e.g. `3. Roll One`.
pub fn format_option(action: PlayerAction) -> String {
    format!("{}. {}", action.choice(), action.label())
}
