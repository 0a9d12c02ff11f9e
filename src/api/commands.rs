use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Position, TableConfig, TableId};
use crate::engine::{
    self, Action, BotDecision, BotPolicy, EngineError, HandState, RandomSource, TableManager,
};
use crate::infra::{IdGenerator, SystemRng};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_hand_view;

/// Счётчик id раздач для одиночных раздач вне `TableManager`.
static HAND_IDS: IdGenerator = IdGenerator::new();

/// Новая раздача за столом с ростером `positions` (системный RNG).
pub fn new_hand<I, P>(positions: I, hero: &Position) -> Result<HandState, EngineError>
where
    I: IntoIterator<Item = P>,
    P: Into<Position>,
{
    new_hand_with_rng(positions, hero, &mut SystemRng)
}

/// То же, что `new_hand`, но с явным источником случайности.
pub fn new_hand_with_rng<I, P, R>(
    positions: I,
    hero: &Position,
    rng: &mut R,
) -> Result<HandState, EngineError>
where
    I: IntoIterator<Item = P>,
    P: Into<Position>,
    R: RandomSource + ?Sized,
{
    let config = TableConfig::new(positions)?;
    engine::new_hand(&config, hero, rng, HAND_IDS.next_hand_id())
}

/// Действие места в раздаче (тонкая обёртка над движком).
pub fn apply_action<P: BotPolicy + ?Sized>(
    hand: &HandState,
    position: &Position,
    action: Action,
    policy: &mut P,
) -> Result<HandState, EngineError> {
    engine::apply_action(hand, position, action, policy)
}

/// Команда над конкретным столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую раздачу; герой садится на `hero`.
    NewHand { hero: Position },

    /// Ход места (обычно героя).
    Act { position: Position, action: Action },

    /// Ответ героя на ставку бота.
    Respond {
        position: Position,
        decision: BotDecision,
    },

    /// Доиграть за ботов до хода героя или шоудауна.
    PlayBots,

    /// Один ход бота (для пошаговой анимации).
    StepBot,
}

/// Разобрать команду из JSON.
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Выполнить команду над столом `table_id`.
pub fn handle_command<P: BotPolicy + ?Sized>(
    manager: &mut TableManager,
    table_id: TableId,
    command: Command,
    policy: &mut P,
) -> Result<CommandResponse, ApiError> {
    debug!("table {table_id}: {command:?}");

    let hand = match command {
        Command::NewHand { hero } => manager.start_hand(table_id, &hero)?,
        Command::Act { position, action } => {
            manager.apply_action(table_id, &position, action, policy)?
        }
        Command::Respond { position, decision } => {
            manager.respond_to_bet(table_id, &position, decision)?
        }
        Command::PlayBots => manager.play_bots(table_id, policy)?,
        Command::StepBot => manager.step_bot(table_id, policy)?,
    };

    let view = build_hand_view(hand);
    Ok(if hand.is_finished() {
        CommandResponse::HandFinished(view)
    } else {
        CommandResponse::HandState(view)
    })
}
