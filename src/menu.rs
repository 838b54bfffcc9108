//! Parsing for the interactive card menu.

use core::str::FromStr;

use crate::error::MenuError;

/// Operation selected from the card menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print the ordered deck (`1`).
    OrderedDeck,
    /// Print a number of random draws (`2`).
    RandomDraws,
    /// Print a shuffled deck (`3`).
    ShuffledDeck,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::OrderedDeck),
            "2" => Ok(Self::RandomDraws),
            "3" => Ok(Self::ShuffledDeck),
            _ => Err(MenuError::InvalidOperation),
        }
    }
}

/// Parses the number of cards to draw.
///
/// Negative numbers are accepted; they draw nothing.
///
/// # Errors
///
/// Returns [`MenuError::InvalidCount`] if the input is not an integer.
pub fn parse_draw_count(input: &str) -> Result<i64, MenuError> {
    input.trim().parse().map_err(|_| MenuError::InvalidCount)
}
