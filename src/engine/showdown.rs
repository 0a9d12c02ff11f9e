//! Шоудаун: определение победителей каждого борда.
//!
//! Борды разрешаются независимо: у первого и второго борда
//! могут быть разные победители.

use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{Board, BoardId, HandRank, Position, Seat};
use crate::engine::errors::EngineError;
use crate::eval::{describe_hand, evaluate_omaha_hand, HandCategory};

/// Категория, которую показываем, когда банк забран без вскрытия.
pub const UNCONTESTED: &str = "Uncontested";

/// Рука одного места на конкретном борде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatHandResult {
    pub position: Position,
    pub rank: HandRank,
    pub description: String,
}

/// Результат одного борда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveResult {
    pub board: BoardId,
    /// Все места с лучшей рукой (больше одного – сплит).
    pub winners: Vec<Position>,
    /// Категория выигравшей руки, либо "Uncontested".
    pub category: String,
    /// Лучшая рука (None – без вскрытия).
    pub best: Option<HandRank>,
    /// Выиграно без вскрытия (все остальные сфолдили).
    pub uncontested: bool,
    /// Вскрытые руки всех участников шоудауна в порядке мест.
    pub reveals: Vec<SeatHandResult>,
}

impl ResolveResult {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn best_category(&self) -> Option<HandCategory> {
        self.best.map(|r| r.category())
    }
}

/// Итог раздачи по обоим бордам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    pub board1: ResolveResult,
    pub board2: ResolveResult,
}

impl ShowdownResult {
    pub fn board(&self, id: BoardId) -> &ResolveResult {
        match id {
            BoardId::First => &self.board1,
            BoardId::Second => &self.board2,
        }
    }
}

/// Разрешить один борд.
///
/// - ни одного несфолдившего места → `NoContenders`;
/// - одно место → побеждает без оценки руки;
/// - иначе оцениваем все места и возвращаем всех, кто равен максимуму.
pub fn resolve_board(seats: &[Seat], board: &Board) -> Result<ResolveResult, EngineError> {
    let contenders: Vec<&Seat> = seats.iter().filter(|s| s.is_in_hand()).collect();

    match contenders.as_slice() {
        [] => Err(EngineError::NoContenders),
        [only] => Ok(ResolveResult {
            board: board.id,
            winners: vec![only.position.clone()],
            category: UNCONTESTED.to_string(),
            best: None,
            uncontested: true,
            reveals: Vec::new(),
        }),
        _ => {
            if board.cards.len() != Board::SIZE {
                return Err(EngineError::InvalidCardCount {
                    expected: Board::SIZE,
                    actual: board.cards.len(),
                });
            }

            let mut reveals = Vec::with_capacity(contenders.len());
            for seat in &contenders {
                let rank = evaluate_omaha_hand(&seat.hole_cards, &board.cards)?;
                reveals.push(SeatHandResult {
                    position: seat.position.clone(),
                    rank,
                    description: describe_hand(rank),
                });
            }

            let best = reveals
                .iter()
                .map(|r| r.rank)
                .max()
                .ok_or(EngineError::NoContenders)?;

            let winners: Vec<Position> = reveals
                .iter()
                .filter(|r| r.rank == best)
                .map(|r| r.position.clone())
                .collect();

            info!(
                "{}: winners {:?} with {}",
                board.id,
                winners,
                describe_hand(best)
            );

            Ok(ResolveResult {
                board: board.id,
                winners,
                category: best.category().to_string(),
                best: Some(best),
                uncontested: false,
                reveals,
            })
        }
    }
}

/// Разрешить оба борда независимо.
pub fn resolve_showdown(
    seats: &[Seat],
    board1: &Board,
    board2: &Board,
) -> Result<ShowdownResult, EngineError> {
    Ok(ShowdownResult {
        board1: resolve_board(seats, board1)?,
        board2: resolve_board(seats, board2)?,
    })
}
