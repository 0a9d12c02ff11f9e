use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;
use crate::domain::table::OMAHA_HOLE_CARDS;
use crate::engine::errors::EngineError;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Сколько карт борда участвует в руке омахи.
const BOARD_CARDS_USED: usize = 3;
/// Сколько карманных карт участвует в руке омахи.
const HOLE_CARDS_USED: usize = 2;

/// Главная функция: лучшая 5-карточная рука омахи.
///
/// Правило омахи: ровно 2 карты из 4 карманных + ровно 3 карты борда.
/// Любые другие сочетания не рассматриваются, даже если они сильнее
/// (флеш на борде с одной подходящей картой в руке – это не флеш).
///
/// На полном борде перебирается C(4,2) × C(5,3) = 60 комбинаций.
/// Борд из 3–4 карт (флоп/тёрн) тоже допустим – так оценивает руку бот.
pub fn evaluate_omaha_hand(hole: &[Card], board: &[Card]) -> Result<HandRank, EngineError> {
    if hole.len() != OMAHA_HOLE_CARDS {
        return Err(EngineError::InvalidCardCount {
            expected: OMAHA_HOLE_CARDS,
            actual: hole.len(),
        });
    }
    if !(BOARD_CARDS_USED..=5).contains(&board.len()) {
        return Err(EngineError::InvalidCardCount {
            expected: 5,
            actual: board.len(),
        });
    }

    let hole_pairs = index_combinations(hole.len(), HOLE_CARDS_USED);
    let board_triples = index_combinations(board.len(), BOARD_CARDS_USED);

    let mut best: Option<HandRank> = None;
    for pair in &hole_pairs {
        for triple in &board_triples {
            let five = [
                hole[pair[0]],
                hole[pair[1]],
                board[triple[0]],
                board[triple[1]],
                board[triple[2]],
            ];
            let r = evaluate_5card_hand(&five);
            if best.map_or(true, |b| r > b) {
                best = Some(r);
            }
        }
    }

    // Оба списка комбинаций непустые при проверенных длинах.
    best.ok_or(EngineError::InvalidCardCount {
        expected: 5,
        actual: board.len(),
    })
}

/// Все k-элементные наборы индексов из 0..n в лексикографическом порядке.
fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn go(start: usize, n: usize, k: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..n {
            cur.push(i);
            go(i + 1, n, k, cur, out);
            cur.pop();
        }
    }

    let mut out = Vec::new();
    go(0, n, k, &mut Vec::with_capacity(k), &mut out);
    out
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    let first_suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == first_suit);

    // Подсчёт рангов.
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }
    let straight_high = detect_straight(rank_mask);

    // Группы (count, rank), сначала по количеству, затем по рангу – обе по убыванию.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|r| (rank_counts[r.value() as usize], *r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let pattern: Vec<u8> = groups.iter().map(|g| g.0).collect();
    let ordered: Vec<Rank> = groups.iter().map(|g| g.1).collect();

    let category = match (is_flush, straight_high, pattern.as_slice()) {
        (true, Some(high), _) => {
            return HandRank::from_category_and_ranks(
                HandCategory::StraightFlush,
                &straight_ranks(high),
            )
        }
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, None, _) => HandCategory::Flush,
        (false, Some(high), _) => {
            return HandRank::from_category_and_ranks(HandCategory::Straight, &straight_ranks(high))
        }
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    // Для групповых категорий порядок групп уже даёт правильные кикеры,
    // для флеша/хай-карты это просто 5 рангов по убыванию.
    HandRank::from_category_and_ranks(category, &ordered)
}

/// Ранги стрита с заданной старшей картой; у wheel туз идёт последним.
fn straight_ranks(high: Rank) -> Vec<Rank> {
    if high == Rank::Five {
        return vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    (0..5)
        .filter_map(|i| Rank::from_value(high.value() - i))
        .collect()
}
