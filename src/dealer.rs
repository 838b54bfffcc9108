//! Seeded dealer that owns its random source.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck;
use crate::draw;
use crate::options::{DealerOptions, ShuffleAlgorithm};

/// Produces decks and random draws from a seeded random number generator.
///
/// The same seed and options always produce the same sequence of results.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Dealer options.
    options: DealerOptions,
    /// Seed the generator was last created from.
    seed: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a new dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Dealer, DealerOptions};
    ///
    /// let mut a = Dealer::new(DealerOptions::default(), 7);
    /// let mut b = Dealer::new(DealerOptions::default(), 7);
    /// assert_eq!(a.shuffled_deck(), b.shuffled_deck());
    /// ```
    #[must_use]
    pub fn new(options: DealerOptions, seed: u64) -> Self {
        Self {
            options,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the dealer options.
    #[must_use]
    pub const fn options(&self) -> &DealerOptions {
        &self.options
    }

    /// Returns the seed of the current generator.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the generator with one created from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns an ordered deck.
    #[must_use]
    pub fn ordered_deck() -> Vec<Card> {
        deck::new_deck()
    }

    /// Returns a freshly generated deck shuffled with the configured algorithm.
    pub fn shuffled_deck(&mut self) -> Vec<Card> {
        let mut cards = deck::new_deck();
        self.shuffle(&mut cards);
        cards
    }

    /// Shuffles `cards` in place with the configured algorithm.
    pub fn shuffle(&mut self, cards: &mut [Card]) {
        match self.options.algorithm {
            ShuffleAlgorithm::PairwiseSwaps => {
                deck::shuffle(cards, &mut self.rng, self.options.swap_count);
            }
            ShuffleAlgorithm::FisherYates => cards.shuffle(&mut self.rng),
        }
    }

    /// Draws a random card with replacement.
    pub fn draw(&mut self) -> Card {
        draw::draw(&mut self.rng)
    }

    /// Returns an iterator yielding `count` random cards with replacement.
    ///
    /// A zero or negative count yields nothing.
    pub fn draws(&mut self, count: i64) -> impl Iterator<Item = Card> {
        draw::draws(&mut self.rng, count)
    }

    /// Draws `count` random cards with replacement.
    ///
    /// A zero or negative count returns an empty vector.
    ///
    /// # Panics
    ///
    /// Panics if the vector for `count` cards cannot be allocated.
    pub fn draw_many(&mut self, count: i64) -> Vec<Card> {
        draw::draw_many(&mut self.rng, count)
    }
}
