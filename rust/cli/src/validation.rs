//! Input parsing for numbered console prompts.
//!
//! Every prompt in the game asks for a whole number out of a fixed set
//! (menu entries, turn options, player counts). Anything else is rejected
//! and the caller simply asks again.

/// Result of parsing one line typed at a numbered prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A number from the allowed set
    Choice(u32),
    /// Anything else, with the reason
    Invalid(String),
}

/// Parse user input into one of the `allowed` numbers.
///
/// Surrounding whitespace and a leading `+` are accepted, so `" 2 "` and `"+2"`
/// both select 2.
///
/// # Example
///
/// ```rust
/// # use twentyone_cli::validation::{parse_choice, ParseResult};
/// assert_eq!(parse_choice("2", &[1, 2, 3]), ParseResult::Choice(2));
/// assert!(matches!(parse_choice("4", &[1, 2, 3]), ParseResult::Invalid(_)));
/// assert!(matches!(parse_choice("roll", &[1, 2, 3]), ParseResult::Invalid(_)));
/// ```
pub fn parse_choice(input: &str, allowed: &[u32]) -> ParseResult {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    let Ok(value) = input.parse::<i64>() else {
        return ParseResult::Invalid(format!("'{}' is not a whole number", input));
    };

    match u32::try_from(value) {
        Ok(n) if allowed.contains(&n) => ParseResult::Choice(n),
        _ => ParseResult::Invalid(format!(
            "{} is not one of {}",
            value,
            allowed
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

/// The numbers `lo..=hi` as a prompt's allowed set.
pub fn choice_range(lo: u32, hi: u32) -> Vec<u32> {
    (lo..=hi).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_numbers() {
        assert_eq!(parse_choice("1", &[1, 2, 3]), ParseResult::Choice(1));
        assert_eq!(parse_choice("  3\t", &[1, 2, 3]), ParseResult::Choice(3));
        assert_eq!(parse_choice("+2", &[1, 2, 3]), ParseResult::Choice(2));
        assert_eq!(parse_choice("007", &[7]), ParseResult::Choice(7));
    }

    #[test]
    fn rejects_numbers_outside_the_set() {
        assert!(matches!(parse_choice("0", &[1, 2]), ParseResult::Invalid(_)));
        assert!(matches!(parse_choice("-1", &[1, 2]), ParseResult::Invalid(_)));
        assert!(matches!(parse_choice("3", &[1, 2]), ParseResult::Invalid(_)));
        assert!(matches!(
            parse_choice("99999999999", &[1, 2]),
            ParseResult::Invalid(_)
        ));
    }

    #[test]
    fn rejects_non_numbers() {
        for input in ["", "   ", "one", "1.5", "1 2", "2x"] {
            assert!(
                matches!(parse_choice(input, &[1, 2, 3]), ParseResult::Invalid(_)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_message_lists_choices() {
        match parse_choice("9", &[1, 2, 3]) {
            ParseResult::Invalid(msg) => assert_eq!(msg, "9 is not one of 1, 2, 3"),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn choice_range_is_inclusive() {
        assert_eq!(choice_range(2, 15).len(), 14);
        assert_eq!(choice_range(1, 4), vec![1, 2, 3, 4]);
    }
}
