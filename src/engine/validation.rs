use crate::domain::{Position, SeatIndex, Street};
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::HandState;
use crate::engine::positions::{count_active_seats, seat_index_of};

/// Проверка, может ли место сделать это действие в текущем состоянии раздачи.
/// Возвращает индекс места.
pub fn validate_action(
    state: &HandState,
    position: &Position,
    action: Action,
) -> Result<SeatIndex, EngineError> {
    if state.street == Street::Showdown {
        return Err(EngineError::InvalidStreet(state.street));
    }

    let idx = seat_index_of(&state.seats, position)
        .ok_or_else(|| EngineError::UnknownPosition(position.to_string()))?;
    let seat = &state.seats[idx as usize];

    if seat.folded {
        return Err(EngineError::InvalidActor(position.clone()));
    }

    // Ходить можно только первому в очереди.
    if state.to_act.first() != Some(&idx) {
        return Err(EngineError::InvalidActor(position.clone()));
    }

    // Последнее место в раздаче не может сбросить – шоудаун без участников невозможен.
    if action == Action::Fold && count_active_seats(&state.seats) <= 1 {
        return Err(EngineError::InvalidActor(position.clone()));
    }

    Ok(idx)
}
