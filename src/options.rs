//! Dealer configuration options.

use crate::deck::DEFAULT_SWAP_COUNT;

/// Algorithm used by a [`Dealer`](crate::Dealer) to shuffle decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleAlgorithm {
    /// Fixed number of random pairwise swaps, see [`shuffle`](crate::shuffle).
    #[default]
    PairwiseSwaps,
    /// Uniform Fisher-Yates shuffle. The swap count is ignored.
    FisherYates,
}

/// Configuration options for a [`Dealer`](crate::Dealer).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DealerOptions, ShuffleAlgorithm};
///
/// let options = DealerOptions::default()
///     .with_swap_count(500)
///     .with_algorithm(ShuffleAlgorithm::PairwiseSwaps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerOptions {
    /// Number of swaps for [`ShuffleAlgorithm::PairwiseSwaps`].
    pub swap_count: usize,
    /// Shuffle algorithm.
    pub algorithm: ShuffleAlgorithm,
}

impl Default for DealerOptions {
    fn default() -> Self {
        Self {
            swap_count: DEFAULT_SWAP_COUNT,
            algorithm: ShuffleAlgorithm::PairwiseSwaps,
        }
    }
}

impl DealerOptions {
    /// Sets the number of swaps per shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DealerOptions;
    ///
    /// let options = DealerOptions::default().with_swap_count(0);
    /// assert_eq!(options.swap_count, 0);
    /// ```
    #[must_use]
    pub const fn with_swap_count(mut self, swap_count: usize) -> Self {
        self.swap_count = swap_count;
        self
    }

    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DealerOptions, ShuffleAlgorithm};
    ///
    /// let options = DealerOptions::default().with_algorithm(ShuffleAlgorithm::FisherYates);
    /// assert_eq!(options.algorithm, ShuffleAlgorithm::FisherYates);
    /// ```
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: ShuffleAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}
