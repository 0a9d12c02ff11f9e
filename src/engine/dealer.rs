//! Раздача карт bomb pot: карманные карты всем местам и два борда
//! из одной общей колоды.
//!
//! Порядок фиксирован:
//!   1. карманные карты – по одной карте за круг, 4 круга,
//!      места в порядке ростера (индекс 0 первым);
//!   2. 5 карт первого борда;
//!   3. 5 карт второго борда.
//!
//! Все карты берутся из одной колоды, поэтому одна и та же карта
//! не может оказаться в двух местах сразу.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Board, BoardId, Deck, Position, Seat, OMAHA_HOLE_CARDS};
use crate::engine::errors::EngineError;

/// Результат раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealtHand {
    pub seats: Vec<Seat>,
    pub board1: Board,
    pub board2: Board,
    pub remaining_deck: Deck,
}

/// Раздать руку из уже перемешанной колоды.
///
/// Одинаковая колода на входе всегда даёт одинаковую раздачу.
pub fn deal_hand(
    mut deck: Deck,
    positions: &[Position],
    hero: &Position,
) -> Result<DealtHand, EngineError> {
    if !positions.contains(hero) {
        return Err(EngineError::UnknownPosition(hero.to_string()));
    }

    let needed = OMAHA_HOLE_CARDS * positions.len() + Board::SIZE * BoardId::BOTH.len();
    if needed > deck.len() {
        return Err(EngineError::InsufficientCards {
            requested: needed,
            remaining: deck.len(),
        });
    }

    let mut seats: Vec<Seat> = positions
        .iter()
        .map(|p| Seat::new(p.clone(), p == hero))
        .collect();

    for _round in 0..OMAHA_HOLE_CARDS {
        for seat in seats.iter_mut() {
            seat.hole_cards.push(deck.draw_one()?);
        }
    }

    let board1 = Board::new(BoardId::First, deck.draw_n(Board::SIZE)?);
    let board2 = Board::new(BoardId::Second, deck.draw_n(Board::SIZE)?);

    debug!(
        "dealt {} seats, hero={}, {} cards left in deck",
        seats.len(),
        hero,
        deck.len()
    );

    Ok(DealtHand {
        seats,
        board1,
        board2,
        remaining_deck: deck,
    })
}
