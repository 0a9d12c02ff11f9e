use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Street;

/// Какой из двух бордов bomb pot'а.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BoardId {
    First,
    Second,
}

impl BoardId {
    pub const BOTH: [BoardId; 2] = [BoardId::First, BoardId::Second];

    /// Номер борда для фронта: 1 или 2.
    pub fn number(self) -> u8 {
        match self {
            BoardId::First => 1,
            BoardId::Second => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<BoardId> {
        match n {
            1 => Some(BoardId::First),
            2 => Some(BoardId::Second),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            BoardId::First => 0,
            BoardId::Second => 1,
        }
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board{}", self.number())
    }
}

/// Общий борд: 5 карт сдаются сразу при создании раздачи,
/// улицы только открывают уже сданные карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: BoardId,
    pub cards: Vec<Card>,
}

impl Board {
    pub const SIZE: usize = 5;

    pub fn new(id: BoardId, cards: Vec<Card>) -> Self {
        Self { id, cards }
    }

    /// Открытая часть борда на заданной улице (3 / 4 / 5 карт).
    pub fn visible(&self, street: Street) -> &[Card] {
        let n = street.visible_board_cards().min(self.cards.len());
        &self.cards[..n]
    }
}
