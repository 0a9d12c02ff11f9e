//! Модуль оценки силы рук омахи (4 карманные, ровно 2 из руки + 3 с борда).
//!
//! Основные функции:
//!   `evaluate_omaha_hand(hole, board) -> Result<HandRank, EngineError>`
//!   `compare_hands(a, b) -> Ordering`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_5card_hand, evaluate_omaha_hand};
pub use hand_rank::{compare_hands, describe_hand, HandCategory};
