//! Validation of numeric menu input

use thiserror::Error;

/// Why a line of input was not accepted as a menu choice.
///
/// The display text is what the player is shown before being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputIssue {
    #[error("Please only enter a number.")]
    NotANumber,

    #[error("Please enter a number from {lower} to {upper}.")]
    OutOfRange { lower: u32, upper: u32 },
}

/// Parse one line of input as a number in `lower..=upper`.
pub fn parse_choice(line: &str, lower: u32, upper: u32) -> Result<u32, InputIssue> {
    let value: i64 = line.trim().parse().map_err(|_| InputIssue::NotANumber)?;

    if value < i64::from(lower) || value > i64::from(upper) {
        return Err(InputIssue::OutOfRange { lower, upper });
    }

    // In range, so it fits
    Ok(value as u32)
}
