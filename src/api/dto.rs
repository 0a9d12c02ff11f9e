use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Street;
use crate::domain::{HandId, Position};
use crate::engine::ShowdownResult;

/// DTO места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatDto {
    pub position: Position,
    pub seat_index: u8,
    pub is_hero: bool,
    pub folded: bool,
    /// Карманные карты – только у героя, у ботов – после шоудауна
    /// (и только если бот дошёл до вскрытия, а вскрытие было).
    pub hole_cards: Option<Vec<Card>>,
}

/// DTO раздачи для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    pub hand_id: HandId,
    pub street: Street,
    pub hero: Option<Position>,
    pub seats: Vec<SeatDto>,
    /// Открытые карты бордов (3 / 4 / 5).
    pub board1: Vec<Card>,
    pub board2: Vec<Card>,
    /// Чей ход (None на шоудауне).
    pub current_actor: Option<Position>,
    /// Герой должен ответить на ставку (Fold / Continue).
    #[serde(default)]
    pub awaiting_response: Option<Position>,
    /// Итог по бордам – только на шоудауне.
    pub showdown: Option<ShowdownResult>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Раздача продолжается – актуальное состояние.
    HandState(HandViewDto),

    /// Раздача дошла до шоудауна.
    HandFinished(HandViewDto),
}

impl CommandResponse {
    pub fn view(&self) -> &HandViewDto {
        match self {
            CommandResponse::HandState(v) | CommandResponse::HandFinished(v) => v,
        }
    }
}
