//! Движок Bomb Pot Omaha на два борда.
//!
//! Каждое место получает 4 карманные карты, сдаются два борда по 5 карт,
//! улицы Flop → Turn → River открывают борды по 3 / 4 / 5 карт,
//! на шоудауне каждый борд разыгрывается отдельно
//! (ровно 2 карманные + ровно 3 карты борда).

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
