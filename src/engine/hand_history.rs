use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{HandRank, Street};
use crate::domain::{BoardId, HandId, Position};
use crate::engine::actions::{Action, BotDecision};

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_id: HandId, hero: Position },

    /// Место получило карманные карты.
    HoleCardsDealt { position: Position, cards: Vec<Card> },

    /// Оба борда сданы (закрыто, открываются по улицам).
    BoardsDealt,

    /// Действие места на своём ходу.
    PlayerActed { position: Position, action: Action },

    /// Бот сбросил карты в ответ на ставку.
    BotFolded { position: Position, bettor: Position },

    /// Герой ответил на чужую ставку.
    BetAnswered {
        position: Position,
        decision: BotDecision,
    },

    /// Переход на новую улицу и открытые карты бордов.
    StreetChanged {
        street: Street,
        board1: Vec<Card>,
        board2: Vec<Card>,
    },

    /// Шоудаун – вскрытие руки на борде.
    ShowdownReveal {
        board: BoardId,
        position: Position,
        rank: HandRank,
    },

    /// Борд выигран (несколько победителей = сплит).
    BoardAwarded {
        board: BoardId,
        winners: Vec<Position>,
        category: String,
    },

    /// Раздача завершена.
    HandFinished { hand_id: HandId },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Все действия мест по порядку.
    pub fn actions(&self) -> impl Iterator<Item = (&Position, Action)> + '_ {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::PlayerActed { position, action } => Some((position, *action)),
            _ => None,
        })
    }
}
