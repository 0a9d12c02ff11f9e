//! Showdown / hand evaluation tests для bombpot-engine.
//!
//! Здесь мы проверяем именно часть "кто сильнее на шоудауне":
//! - порядок категорий (straight flush > quads > ... > high card);
//! - wheel (A-2-3-4-5) – самый младший стрит;
//! - правило Омахи: ровно 2 карманные + ровно 3 карты борда;
//! - кикеры и split на одном борде;
//! - полный перебор всех 2 598 960 пятикарточных рук;
//! - разрешение борда без вскрытия (одно место в раздаче).

use bombpot_engine::domain::card::{Card, Rank, Suit};
use bombpot_engine::domain::{Board, BoardId, Deck, Position, Seat};
use bombpot_engine::engine::{resolve_board, resolve_showdown, EngineError, UNCONTESTED};
use bombpot_engine::eval::{
    compare_hands, evaluate_5card_hand, evaluate_omaha_hand, HandCategory,
};
use bombpot_engine::infra::DeterministicRng;

use std::cmp::Ordering;

// Подтягиваем конструктор вариантов Rank::* и Suit::* в область видимости.
use Rank::*;
use Suit::*;

/// Удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

/// Место с заданными карманными картами.
fn seat(label: &str, hole: [Card; 4]) -> Seat {
    let mut s = Seat::new(Position::new(label), false);
    s.hole_cards = hole.to_vec();
    s
}

//
// ============= ТЕСТ 1: порядок категорий ============
//
#[test]
fn categories_are_strictly_ordered() {
    let hands = [
        [c(Two, Clubs), c(Five, Diamonds), c(Nine, Hearts), c(Jack, Spades), c(King, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Nine, Hearts), c(Jack, Spades), c(King, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Nine, Hearts), c(Nine, Spades), c(King, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Jack, Spades), c(King, Clubs)],
        [c(Five, Clubs), c(Six, Diamonds), c(Seven, Hearts), c(Eight, Spades), c(Nine, Clubs)],
        [c(Two, Clubs), c(Five, Clubs), c(Nine, Clubs), c(Jack, Clubs), c(King, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Nine, Spades), c(Nine, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Two, Spades), c(Nine, Clubs)],
        [c(Five, Clubs), c(Six, Clubs), c(Seven, Clubs), c(Eight, Clubs), c(Nine, Clubs)],
    ];

    let ranks: Vec<_> = hands.iter().map(evaluate_5card_hand).collect();

    for (rank, expected) in ranks.iter().zip(HandCategory::ALL) {
        assert_eq!(rank.category(), expected);
    }
    for pair in ranks.windows(2) {
        assert!(pair[0] < pair[1], "{:?} должен быть слабее {:?}", pair[0], pair[1]);
        assert_eq!(compare_hands(pair[0], pair[1]), Ordering::Less);
    }
}

//
// ============= ТЕСТ 2: самая младшая рука категории бьёт самую старшую ниже ============
//
#[test]
fn weakest_pair_beats_best_high_card() {
    let ace_high = evaluate_5card_hand(&[
        c(Ace, Clubs),
        c(King, Diamonds),
        c(Queen, Hearts),
        c(Jack, Spades),
        c(Nine, Clubs),
    ]);
    let deuces = evaluate_5card_hand(&[
        c(Two, Clubs),
        c(Two, Diamonds),
        c(Three, Hearts),
        c(Four, Spades),
        c(Five, Clubs),
    ]);
    // 2-2-3-4-5 – пара, а не стрит.
    assert_eq!(deuces.category(), HandCategory::OnePair);
    assert!(deuces > ace_high);
}

//
// ============= ТЕСТ 3: wheel ============
//
#[test]
fn wheel_is_lowest_straight() {
    let board = [c(Ace, Spades), c(Two, Diamonds), c(Three, Clubs), c(King, Hearts), c(Queen, Spades)];
    let hole = [c(Four, Hearts), c(Five, Diamonds), c(Nine, Clubs), c(Nine, Spades)];

    let wheel = evaluate_omaha_hand(&hole, &board).unwrap();
    assert_eq!(wheel.category(), HandCategory::Straight);
    assert_eq!(wheel.ranks(), vec![Five, Four, Three, Two, Ace]);

    let six_high = evaluate_5card_hand(&[
        c(Two, Clubs),
        c(Three, Diamonds),
        c(Four, Hearts),
        c(Five, Spades),
        c(Six, Clubs),
    ]);
    let trips_aces = evaluate_5card_hand(&[
        c(Ace, Clubs),
        c(Ace, Diamonds),
        c(Ace, Hearts),
        c(King, Spades),
        c(Queen, Clubs),
    ]);

    assert!(wheel < six_high);
    assert!(wheel > trips_aces);
}

//
// ============= ТЕСТ 4: флеш на борде + одна масть в руке – не флеш ============
//
#[test]
fn one_suited_hole_card_does_not_make_flush() {
    let board = [c(Two, Hearts), c(Five, Hearts), c(Nine, Hearts), c(Jack, Hearts), c(King, Diamonds)];

    let one_heart = [c(Ace, Hearts), c(Queen, Spades), c(Seven, Clubs), c(Three, Diamonds)];
    let r = evaluate_omaha_hand(&one_heart, &board).unwrap();
    assert_eq!(r.category(), HandCategory::HighCard);

    let two_hearts = [c(Ace, Hearts), c(Ten, Hearts), c(Seven, Clubs), c(Three, Diamonds)];
    let r = evaluate_omaha_hand(&two_hearts, &board).unwrap();
    assert_eq!(r.category(), HandCategory::Flush);
    assert_eq!(r.ranks()[0], Ace);
}

//
// ============= ТЕСТ 5: стрит с четырьмя картами борда требует двух карманных ============
//
#[test]
fn four_card_board_straight_needs_two_hole_cards() {
    let board = [c(Five, Clubs), c(Six, Diamonds), c(Seven, Hearts), c(Eight, Spades), c(King, Clubs)];

    // Одна девятка в руке: в холдеме был бы стрит, в Омахе – только пара тузов.
    let single_nine = [c(Nine, Diamonds), c(Ace, Clubs), c(Ace, Diamonds), c(Two, Spades)];
    let r = evaluate_omaha_hand(&single_nine, &board).unwrap();
    assert_eq!(r.category(), HandCategory::OnePair);
    assert_eq!(r.ranks()[0], Ace);

    let nine_ten = [c(Nine, Diamonds), c(Ten, Diamonds), c(Two, Clubs), c(Two, Spades)];
    let r = evaluate_omaha_hand(&nine_ten, &board).unwrap();
    assert_eq!(r.category(), HandCategory::Straight);
    assert_eq!(r.ranks()[0], Ten);
}

//
// ============= ТЕСТ 6: кикер ============
//
#[test]
fn kicker_decides_same_pair() {
    let board = Board::new(
        BoardId::First,
        vec![c(King, Clubs), c(King, Diamonds), c(Seven, Hearts), c(Four, Spades), c(Two, Clubs)],
    );
    let seats = vec![
        seat("SB", [c(Queen, Hearts), c(Nine, Clubs), c(Eight, Diamonds), c(Six, Hearts)]),
        seat("BB", [c(Ace, Hearts), c(Nine, Diamonds), c(Eight, Spades), c(Six, Clubs)]),
    ];

    let result = resolve_board(&seats, &board).unwrap();
    assert_eq!(result.winners, vec![Position::new("BB")]);
    assert!(!result.is_split());
    assert_eq!(result.best_category(), Some(HandCategory::OnePair));
    assert_eq!(result.reveals.len(), 2);
}

//
// ============= ТЕСТ 7: split ============
//
#[test]
fn equal_best_hands_split_the_board() {
    let board = Board::new(
        BoardId::Second,
        vec![c(Ace, Clubs), c(King, Diamonds), c(Queen, Hearts), c(Jack, Spades), c(Two, Clubs)],
    );
    let seats = vec![
        seat("EP", [c(Ten, Hearts), c(Nine, Hearts), c(Three, Diamonds), c(Four, Diamonds)]),
        seat("MP", [c(Two, Diamonds), c(Two, Hearts), c(Seven, Spades), c(Eight, Spades)]),
        seat("CO", [c(Ten, Spades), c(Nine, Spades), c(Five, Clubs), c(Six, Clubs)]),
    ];

    let result = resolve_board(&seats, &board).unwrap();
    assert!(result.is_split());
    assert_eq!(result.winners, vec![Position::new("EP"), Position::new("CO")]);
    assert_eq!(result.category, HandCategory::Straight.to_string());
    assert_eq!(result.board, BoardId::Second);
}

//
// ============= ТЕСТ 8: одно место – без оценки ============
//
#[test]
fn single_contender_wins_uncontested() {
    // Борд неполный – оценка бы упала, но она и не нужна.
    let board = Board::new(BoardId::First, vec![c(Two, Clubs), c(Three, Clubs), c(Four, Clubs)]);
    let mut folded = seat("SB", [c(Ace, Clubs), c(Ace, Diamonds), c(Ace, Hearts), c(Ace, Spades)]);
    folded.folded = true;
    let seats = vec![
        folded,
        seat("BB", [c(Nine, Clubs), c(Nine, Diamonds), c(Eight, Hearts), c(Eight, Spades)]),
    ];

    let result = resolve_board(&seats, &board).unwrap();
    assert_eq!(result.winners, vec![Position::new("BB")]);
    assert_eq!(result.category, UNCONTESTED);
    assert!(result.uncontested);
    assert!(result.best.is_none());
    assert!(result.reveals.is_empty());
}

#[test]
fn no_contenders_is_an_error() {
    let board = Board::new(BoardId::First, Vec::new());
    let mut s = seat("SB", [c(Ace, Clubs), c(Ace, Diamonds), c(Ace, Hearts), c(Ace, Spades)]);
    s.folded = true;

    assert_eq!(resolve_board(&[s], &board), Err(EngineError::NoContenders));
}

//
// ============= ТЕСТ 9: борды независимы ============
//
#[test]
fn boards_resolve_independently() {
    let board1 = Board::new(
        BoardId::First,
        vec![c(Ace, Spades), c(Ace, Hearts), c(Seven, Clubs), c(Four, Diamonds), c(Two, Hearts)],
    );
    let board2 = Board::new(
        BoardId::Second,
        vec![c(King, Spades), c(King, Hearts), c(Eight, Clubs), c(Five, Diamonds), c(Three, Spades)],
    );
    let seats = vec![
        // Пара тузов в руке → каре на первом борде.
        seat("HJ", [c(Ace, Clubs), c(Ace, Diamonds), c(Six, Spades), c(Ten, Clubs)]),
        // Пара королей в руке → каре на втором борде.
        seat("CO", [c(King, Clubs), c(King, Diamonds), c(Nine, Spades), c(Jack, Hearts)]),
    ];

    let result = resolve_showdown(&seats, &board1, &board2).unwrap();
    assert_eq!(result.board(BoardId::First).winners, vec![Position::new("HJ")]);
    assert_eq!(result.board(BoardId::Second).winners, vec![Position::new("CO")]);
    assert_eq!(result.board1.best_category(), Some(HandCategory::FourOfAKind));
    assert_eq!(result.board2.best_category(), Some(HandCategory::FourOfAKind));
}

//
// ============= ТЕСТ 10: неверное число карт ============
//
#[test]
fn evaluator_rejects_wrong_card_counts() {
    let board = [c(Two, Clubs), c(Three, Clubs), c(Four, Clubs), c(Five, Clubs), c(Six, Clubs)];
    let three_hole = [c(Ace, Hearts), c(King, Hearts), c(Queen, Hearts)];

    assert_eq!(
        evaluate_omaha_hand(&three_hole, &board),
        Err(EngineError::InvalidCardCount { expected: 4, actual: 3 })
    );

    let hole = [c(Ace, Hearts), c(King, Hearts), c(Queen, Hearts), c(Jack, Hearts)];
    assert!(evaluate_omaha_hand(&hole, &board[..2]).is_err());
    // Флоп и тёрн тоже оцениваются (для ботов).
    assert!(evaluate_omaha_hand(&hole, &board[..3]).is_ok());
    assert!(evaluate_omaha_hand(&hole, &board[..4]).is_ok());
}

//
// ============= ТЕСТ 11: полный перебор C(52,5) ============
//
#[test]
fn every_five_card_hand_has_known_category_counts() {
    const EXPECTED: [u32; 9] = [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40];

    let deck = Deck::standard_52().cards;
    let mut counts = [0u32; 9];
    // Самая слабая и самая сильная рука каждой категории.
    let mut lowest = [None; 9];
    let mut highest = [None; 9];

    for i in 0..52 {
        for j in i + 1..52 {
            for k in j + 1..52 {
                for l in k + 1..52 {
                    for m in l + 1..52 {
                        let rank = evaluate_5card_hand(&[deck[i], deck[j], deck[k], deck[l], deck[m]]);
                        let cat = rank.category() as usize;
                        counts[cat] += 1;
                        lowest[cat] = Some(lowest[cat].map_or(rank, |r| rank.min(r)));
                        highest[cat] = Some(highest[cat].map_or(rank, |r| rank.max(r)));
                    }
                }
            }
        }
    }

    assert_eq!(counts, EXPECTED);
    assert_eq!(counts.iter().sum::<u32>(), 2_598_960);

    // Любая рука категории сильнее любой руки категории ниже.
    for cat in 1..9 {
        let (below, above) = (highest[cat - 1].unwrap(), lowest[cat].unwrap());
        assert!(
            below < above,
            "{:?}: {:?} не слабее {:?}",
            HandCategory::ALL[cat],
            below,
            above
        );
        assert_eq!(compare_hands(below, above), Ordering::Less);
    }
}

//
// ============= ТЕСТ 12: Омаха = лучшая из 60 комбинаций 2+3 ============
//
#[test]
fn omaha_rank_is_best_two_plus_three_on_random_deals() {
    let mut rng = DeterministicRng::from_seed(31);

    for _ in 0..2_000 {
        let mut deck = Deck::standard_52();
        deck.shuffle(&mut rng);
        let hole = &deck.cards[..4];
        let board = &deck.cards[4..9];

        let mut best = None;
        for i in 0..4 {
            for j in i + 1..4 {
                for x in 0..5 {
                    for y in x + 1..5 {
                        for z in y + 1..5 {
                            let rank = evaluate_5card_hand(&[hole[i], hole[j], board[x], board[y], board[z]]);
                            best = Some(best.map_or(rank, |b| rank.max(b)));
                        }
                    }
                }
            }
        }

        assert_eq!(evaluate_omaha_hand(hole, board).ok(), best, "hole {hole:?} board {board:?}");
    }
}
