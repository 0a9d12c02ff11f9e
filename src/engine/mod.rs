//! Движок bomb pot: раздача, улицы, реакции ботов, шоудаун по двум бордам.
//!
//! Высокоуровневый объект: `HandState`
//! Основные операции:
//!   - `new_hand` – запустить новую раздачу
//!   - `apply_action` – применить действие места (новый снимок состояния)
//!   - `respond_to_bet` – ответ героя на ставку бота
//!   - `step_bot` / `play_bots` – ходы ботов
//!   - `resolve_board` – шоудаун одного борда

pub mod actions;
pub mod bot;
pub mod dealer;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod showdown;
pub mod table_manager;
pub mod validation;

pub use actions::{Action, BotDecision};
pub use bot::{AlwaysContinue, AlwaysFold, BotPolicy, BotView, EquityBot, FoldOnBet, RandomFoldBot};
pub use dealer::{deal_hand, DealtHand};
pub use errors::EngineError;
pub use game_loop::{apply_action, new_hand, play_bots, respond_to_bet, step_bot, HandState};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use showdown::{
    resolve_board, resolve_showdown, ResolveResult, SeatHandResult, ShowdownResult, UNCONTESTED,
};
pub use table_manager::TableManager;

/// Источник случайности для перемешивания колоды.
/// Реализации – в infra (системный, по seed, по заданной перестановке);
/// тесты могут подставить свой.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
