//! Доменная модель bomb pot: карты, колода, места, борды, улицы, конфиг стола.

pub mod board;
pub mod card;
pub mod deck;
pub mod hand;
pub mod seat;
pub mod table;

// Базовые идентификаторы.
pub type TableId = u64;
pub type HandId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use board::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use seat::*;
pub use table::*;
