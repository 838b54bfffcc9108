//! Ordered deck generation and the pairwise-swap shuffle.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Number of swaps performed by a default shuffle.
pub const DEFAULT_SWAP_COUNT: usize = 100;

/// Creates an ordered deck containing every card exactly once.
///
/// Suits form the outer loop and ranks the inner loop, both in declaration
/// order, so `deck[i] == Card::from_index(i)`.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, new_deck};
///
/// let deck = new_deck();
/// assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Two));
/// assert_eq!(deck[51], Card::new(Suit::Spades, Rank::Ace));
/// ```
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Shuffles `deck` in place with `swap_count` random pairwise swaps.
///
/// Each iteration draws two indices from `0..deck.len()` and swaps the cards
/// at those positions; equal indices leave the deck as is but still consume
/// both draws. This is not a uniform shuffle for small swap counts. An empty
/// deck is left untouched and consumes no randomness.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R, swap_count: usize) {
    let len = deck.len();
    if len == 0 {
        return;
    }

    for _ in 0..swap_count {
        let i = rng.random_range(0..len);
        let k = rng.random_range(0..len);
        if i != k {
            deck.swap(i, k);
        }
    }
}

/// Creates an ordered deck and shuffles it with [`shuffle`].
#[must_use]
pub fn new_shuffled_deck<R: Rng + ?Sized>(rng: &mut R, swap_count: usize) -> Vec<Card> {
    let mut deck = new_deck();
    shuffle(&mut deck, rng, swap_count);
    deck
}
