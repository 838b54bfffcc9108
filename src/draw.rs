//! Random single-card draws with replacement.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, Rank, Suit};

/// Draws a random card.
///
/// The suit and the rank are chosen independently and uniformly. No deck is
/// involved, so repeated draws can return the same card.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Card {
    let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
    let rank = Rank::ALL[rng.random_range(0..Rank::ALL.len())];
    Card::new(suit, rank)
}

/// Returns an iterator yielding `count` random cards, drawn lazily.
///
/// A zero or negative count yields nothing. Counts beyond `usize::MAX` are
/// clamped to it.
///
/// # Example
///
/// ```
/// use deckrs::draws;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// assert_eq!(draws(&mut rng, i64::MAX).take(3).count(), 3);
/// assert_eq!(draws(&mut rng, -1).count(), 0);
/// ```
pub fn draws<R: Rng + ?Sized>(rng: &mut R, count: i64) -> impl Iterator<Item = Card> {
    let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    core::iter::repeat_with(move || draw(&mut *rng)).take(count)
}

/// Draws `count` random cards into a vector.
///
/// A zero or negative count returns an empty vector. Use [`draws`] to stream
/// large counts.
///
/// # Panics
///
/// Panics if the vector for `count` cards cannot be allocated.
pub fn draw_many<R: Rng + ?Sized>(rng: &mut R, count: i64) -> Vec<Card> {
    draws(rng, count).collect()
}

/// A random card generator that owns its random source.
#[derive(Debug, Clone)]
pub struct CardDrawer<R> {
    rng: R,
}

impl<R: Rng> CardDrawer<R> {
    /// Creates a drawer backed by `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a random card.
    pub fn draw(&mut self) -> Card {
        draw(&mut self.rng)
    }

    /// Returns an iterator yielding `count` random cards, drawn lazily.
    pub fn draws(&mut self, count: i64) -> impl Iterator<Item = Card> {
        draws(&mut self.rng, count)
    }

    /// Draws `count` random cards. A non-positive count draws nothing.
    ///
    /// # Panics
    ///
    /// Panics if the vector for `count` cards cannot be allocated.
    pub fn draw_many(&mut self, count: i64) -> Vec<Card> {
        draw_many(&mut self.rng, count)
    }

    /// Returns the underlying random source.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}
