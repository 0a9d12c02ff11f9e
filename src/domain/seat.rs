use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Метка позиции за столом: "SB", "BB", "EP", "MP", "HJ", "CO", "BTN"...
///
/// Набор позиций задаёт `TableConfig`; позиция одновременно является
/// идентификатором места в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Position(pub String);

impl Position {
    pub fn new(label: impl Into<String>) -> Self {
        Position(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        Position(s.to_string())
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        Position(s)
    }
}

impl PartialEq<str> for Position {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Position {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Место в раздаче: позиция, 4 карманные карты и флаги.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub position: Position,
    /// Карманные карты (ровно 4 для омахи).
    pub hole_cards: Vec<Card>,
    /// Сфолдил ли игрок. Сфолдившее место больше не ходит и не участвует в шоудауне.
    pub folded: bool,
    /// Место живого игрока (ровно одно на раздачу), остальные – боты.
    pub is_hero: bool,
}

impl Seat {
    pub fn new(position: Position, is_hero: bool) -> Self {
        Self {
            position,
            hole_cards: Vec::with_capacity(4),
            folded: false,
            is_hero,
        }
    }

    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    pub fn is_bot(&self) -> bool {
        !self.is_hero
    }
}
