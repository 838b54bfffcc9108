//! Dealer integration tests.

use deckrs::{
    DECK_SIZE, Dealer, DealerOptions, ShuffleAlgorithm, draw_many, new_deck, new_shuffled_deck,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

#[test]
fn options_defaults_and_builder() {
    let options = DealerOptions::default();
    assert_eq!(options.swap_count, 100);
    assert_eq!(options.algorithm, ShuffleAlgorithm::PairwiseSwaps);

    let options = options
        .with_swap_count(12)
        .with_algorithm(ShuffleAlgorithm::FisherYates);
    assert_eq!(options.swap_count, 12);
    assert_eq!(options.algorithm, ShuffleAlgorithm::FisherYates);
}

#[test]
fn ordered_deck_matches_new_deck() {
    assert_eq!(Dealer::ordered_deck(), new_deck());
}

#[test]
fn pairwise_shuffle_matches_seeded_rng() {
    let mut dealer = Dealer::new(DealerOptions::default().with_swap_count(250), 77);
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    assert_eq!(dealer.shuffled_deck(), new_shuffled_deck(&mut rng, 250));
}

#[test]
fn fisher_yates_shuffle_uses_slice_shuffle() {
    let options = DealerOptions::default().with_algorithm(ShuffleAlgorithm::FisherYates);
    let mut dealer = Dealer::new(options, 5);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut expected = new_deck();
    expected.shuffle(&mut rng);

    let shuffled = dealer.shuffled_deck();
    assert_eq!(shuffled, expected);
    assert_eq!(shuffled.len(), DECK_SIZE);
}

#[test]
fn zero_swaps_keep_order() {
    let mut dealer = Dealer::new(DealerOptions::default().with_swap_count(0), 9);
    assert_eq!(dealer.shuffled_deck(), new_deck());

    let mut cards = new_deck();
    cards.reverse();
    let before = cards.clone();
    dealer.shuffle(&mut cards);
    assert_eq!(cards, before);
}

#[test]
fn draws_follow_seed() {
    let mut dealer = Dealer::new(DealerOptions::default(), 31);
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    assert_eq!(dealer.draw_many(10), draw_many(&mut rng, 10));
    assert!(dealer.draw_many(0).is_empty());
    assert!(dealer.draw_many(-10).is_empty());
    assert_eq!(
        dealer.draws(5).collect::<Vec<_>>(),
        draw_many(&mut rng, 5)
    );
}

#[test]
fn huge_draw_count_streams() {
    let mut dealer = Dealer::new(DealerOptions::default(), 12);
    let first: Vec<_> = dealer.draws(i64::MAX).take(4).collect();
    assert_eq!(first.len(), 4);
}

#[test]
fn reseed_restarts_sequence() {
    let mut dealer = Dealer::new(DealerOptions::default(), 3);
    let first_deck = dealer.shuffled_deck();
    let first_draw = dealer.draw();

    dealer.reseed(4);
    assert_eq!(dealer.seed(), 4);
    let other = dealer.shuffled_deck();
    assert_ne!(other, first_deck);

    dealer.reseed(3);
    assert_eq!(dealer.seed(), 3);
    assert_eq!(dealer.shuffled_deck(), first_deck);
    assert_eq!(dealer.draw(), first_draw);
}
