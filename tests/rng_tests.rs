//! RNG tests for bombpot-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после shuffle
//! - стабильность RngSeed::derive
//! - работу Deck + shuffle + RandomSource

use std::collections::HashSet;

use bombpot_engine::domain::deck::Deck;
use bombpot_engine::engine::RandomSource;
use bombpot_engine::infra::{DeterministicRng, PermutationRng, RngSeed, SystemRng};

//
// TEST 1: DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2: different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();
    a.shuffle(&mut r1);
    b.shuffle(&mut r2);

    assert_ne!(a, b, "Different seeds should give different decks");
}

//
// TEST 3: shuffle keeps 52 unique cards
//
#[test]
fn shuffled_deck_has_no_duplicates() {
    for seed in 0..20u64 {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut DeterministicRng::from_seed(seed));

        let unique: HashSet<_> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    let mut deck = Deck::standard_52();
    deck.shuffle(&mut SystemRng);
    let unique: HashSet<_> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

//
// TEST 4: RngSeed::derive is stable and sensitive to every input
//
#[test]
fn rng_seed_derive_is_stable() {
    let base = RngSeed::from_u64(42);

    let s1 = base.derive(1, 10, 0);
    let s2 = base.derive(1, 10, 0);
    assert_eq!(s1, s2);

    assert_ne!(s1, base.derive(2, 10, 0));
    assert_ne!(s1, base.derive(1, 11, 0));
    assert_ne!(s1, base.derive(1, 10, 1));
    assert_ne!(s1, RngSeed::from_u64(43).derive(1, 10, 0));
}

#[test]
fn rng_seed_to_rng_replays_deck() {
    let seed = RngSeed::from_u64(7).derive(3, 4, 5);

    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();
    a.shuffle(&mut seed.to_rng());
    b.shuffle(&mut seed.to_rng());

    assert_eq!(a, b);
}

//
// TEST 5: PermutationRng puts requested cards on top
//
#[test]
fn permutation_rng_reverses_deck() {
    let order: Vec<usize> = (0..52).rev().collect();
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut PermutationRng::new(order));

    let canonical = Deck::standard_52().cards;
    let reversed: Vec<_> = canonical.iter().rev().copied().collect();
    assert_eq!(deck.cards, reversed);
}

//
// TEST 6: empty slice shuffle does not panic
//
#[test]
fn shuffle_empty_slice() {
    let mut empty: Vec<u8> = Vec::new();
    DeterministicRng::from_seed(1).shuffle(&mut empty);
    SystemRng.shuffle(&mut empty);
    PermutationRng::identity(0).shuffle(&mut empty);
    assert!(empty.is_empty());
}
