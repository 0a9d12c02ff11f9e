use crate::domain::card::Card;
use crate::domain::BoardId;
use crate::engine::{EngineError, HandState, ShowdownResult};

use super::dto::{HandViewDto, SeatDto};

/// Открытая часть борда №1 или №2 на текущей улице.
pub fn get_visible_board(hand: &HandState, board_no: u8) -> Result<Vec<Card>, EngineError> {
    let id = BoardId::from_number(board_no).ok_or(EngineError::InvalidBoard(board_no))?;
    Ok(hand.visible_board(id).to_vec())
}

/// Итог шоудауна по обоим бордам.
pub fn get_showdown_result(hand: &HandState) -> Result<ShowdownResult, EngineError> {
    hand.showdown_result().cloned()
}

/// Сформировать DTO раздачи. Карты ботов скрыты до шоудауна
/// и остаются скрытыми, если до вскрытия не дошло.
pub fn build_hand_view(hand: &HandState) -> HandViewDto {
    HandViewDto {
        hand_id: hand.hand_id,
        street: hand.street,
        hero: hand.hero().map(|s| s.position.clone()),
        seats: build_seats_dto(hand),
        board1: hand.visible_board(BoardId::First).to_vec(),
        board2: hand.visible_board(BoardId::Second).to_vec(),
        current_actor: hand.current_actor().map(|s| s.position.clone()),
        awaiting_response: hand.responder().map(|s| s.position.clone()),
        showdown: hand.showdown_result().ok().cloned(),
    }
}

/// Собрать DTO мест за столом.
fn build_seats_dto(hand: &HandState) -> Vec<SeatDto> {
    hand.seats
        .iter()
        .enumerate()
        .map(|(idx, seat)| {
            let revealed = hand.is_finished() && !hand.is_uncontested() && !seat.folded;
            let show_cards = seat.is_hero || revealed;
            SeatDto {
                position: seat.position.clone(),
                seat_index: idx as u8,
                is_hero: seat.is_hero,
                folded: seat.folded,
                hole_cards: show_cards.then(|| seat.hole_cards.clone()),
            }
        })
        .collect()
}
