//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Number of suits.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Card suit.
///
/// Suits are ordered by declaration, which is also the order used when
/// generating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the zero-based position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the upper-case name of the suit, e.g. `"CLUBS"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "CLUBS",
            Self::Diamonds => "DIAMONDS",
            Self::Hearts => "HEARTS",
            Self::Spades => "SPADES",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in declaration order.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the zero-based position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the point value of the rank.
    ///
    /// Pip cards are worth their number, Jack 11, Queen 12, King 13 and Ace 14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Returns the upper-case name of the rank, e.g. `"TWO"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Ace => "ACE",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Cards compare by suit first and rank second, so sorting a deck restores
/// the order produced by [`new_deck`](crate::deck::new_deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the position of this card in an ordered deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.ordinal() * RANK_COUNT + self.rank.ordinal()
    }

    /// Returns the card at `index` in an ordered deck, or `None` if the index
    /// is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        Some(Self::new(
            Suit::ALL[index / RANK_COUNT],
            Rank::ALL[index % RANK_COUNT],
        ))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s
            .trim()
            .split_once('-')
            .ok_or(ParseCardError::MissingSeparator)?;
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}
