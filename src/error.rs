//! Error types for parsing cards and driver input.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The suit name is not recognized.
    #[error("unknown suit")]
    UnknownSuit,
    /// The rank name is not recognized.
    #[error("unknown rank")]
    UnknownRank,
    /// The text has no `-` between suit and rank.
    #[error("missing '-' between suit and rank")]
    MissingSeparator,
}

/// Errors that can occur when reading menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The input does not name a known operation.
    #[error("invalid operation")]
    InvalidOperation,
    /// The draw count is not an integer.
    #[error("invalid card count")]
    InvalidCount,
}
