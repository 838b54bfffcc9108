//! Playing card deck generation, shuffling and random draws with optional
//! `no_std` support.
//!
//! The crate provides the [`Card`] value type, ordered deck generation with
//! [`new_deck`], the fixed-count pairwise-swap [`shuffle`], random draws with
//! replacement through [`draw`], and a seeded [`Dealer`] that owns its random
//! source.
//!
//! # Example
//!
//! ```no_run
//! use deckrs::{Dealer, DealerOptions};
//!
//! let mut dealer = Dealer::new(DealerOptions::default(), 42);
//! let deck = dealer.shuffled_deck();
//! let _ = deck;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod draw;
pub mod error;
pub mod menu;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, Rank, SUIT_COUNT, Suit};
pub use dealer::Dealer;
pub use deck::{DEFAULT_SWAP_COUNT, new_deck, new_shuffled_deck, shuffle};
pub use draw::{CardDrawer, draw, draw_many, draws};
pub use error::{MenuError, ParseCardError};
pub use menu::{MenuChoice, parse_draw_count};
pub use options::{DealerOptions, ShuffleAlgorithm};
