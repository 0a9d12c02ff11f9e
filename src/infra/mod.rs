//! Инфраструктурный слой вокруг движка:
//! - генерация ID;
//! - RNG-реализации для перемешивания колоды;
//! - seed'ы для воспроизводимых серий раздач.

pub mod ids;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use rng::*;
pub use rng_seed::RngSeed;
