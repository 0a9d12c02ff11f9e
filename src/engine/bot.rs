//! Политики ботов.
//!
//! Движок не знает, как бот думает: он спрашивает `BotPolicy` и применяет
//! ответ. Тесты подставляют детерминированные политики, игра – случайные
//! или "по силе руки".

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::{Card, Position, Street};
use crate::engine::actions::{Action, BotDecision};
use crate::eval::{evaluate_omaha_hand, HandCategory};

/// То, что бот видит со своего места. Чужих карманных карт здесь нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotView {
    pub position: Position,
    pub hole_cards: Vec<Card>,
    pub board1: Vec<Card>,
    pub board2: Vec<Card>,
    pub street: Street,
    /// Бота спрашивают в ответ на bet.
    pub facing_bet: bool,
    /// Сколько соперников ещё в раздаче (кроме самого бота).
    pub opponents_in: usize,
}

/// Стратегия бота.
pub trait BotPolicy {
    /// Реакция на чужой bet: сбросить или продолжить.
    fn decide(&mut self, view: &BotView) -> BotDecision;

    /// Действие на собственном ходу. По умолчанию боты чекают.
    fn choose_action(&mut self, _view: &BotView) -> Action {
        Action::Check
    }
}

/// Любая функция `FnMut(&BotView) -> BotDecision` – тоже политика.
impl<F> BotPolicy for F
where
    F: FnMut(&BotView) -> BotDecision,
{
    fn decide(&mut self, view: &BotView) -> BotDecision {
        self(view)
    }
}

/// Никогда не фолдит.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysContinue;

impl BotPolicy for AlwaysContinue {
    fn decide(&mut self, _view: &BotView) -> BotDecision {
        BotDecision::Continue
    }
}

/// Всегда фолдит, когда его спрашивают.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysFold;

impl BotPolicy for AlwaysFold {
    fn decide(&mut self, _view: &BotView) -> BotDecision {
        BotDecision::Fold
    }
}

/// Фолдит только на сигнал ставки.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoldOnBet;

impl BotPolicy for FoldOnBet {
    fn decide(&mut self, view: &BotView) -> BotDecision {
        if view.facing_bet {
            BotDecision::Fold
        } else {
            BotDecision::Continue
        }
    }
}

/// Случайный бот: фолдит на ставку с фиксированной вероятностью,
/// на своём ходу иногда ставит сам.
#[derive(Clone, Debug)]
pub struct RandomFoldBot {
    pub fold_probability: f64,
    pub bet_probability: f64,
    rng: StdRng,
}

impl RandomFoldBot {
    /// Воспроизводимый бот (для реплеев и тестов).
    pub fn from_seed(fold_probability: f64, bet_probability: f64, seed: u64) -> Self {
        Self {
            fold_probability: probability(fold_probability),
            bet_probability: probability(bet_probability),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(fold_probability: f64, bet_probability: f64) -> Self {
        Self {
            fold_probability: probability(fold_probability),
            bet_probability: probability(bet_probability),
            rng: StdRng::from_entropy(),
        }
    }
}

/// Вероятность в [0, 1]. NaN и бесконечности считаются нулём:
/// `gen_bool` паникует на значениях вне диапазона.
fn probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl BotPolicy for RandomFoldBot {
    fn decide(&mut self, view: &BotView) -> BotDecision {
        // Поля публичные, поэтому значение чистится и здесь.
        if view.facing_bet && self.rng.gen_bool(probability(self.fold_probability)) {
            BotDecision::Fold
        } else {
            BotDecision::Continue
        }
    }

    fn choose_action(&mut self, _view: &BotView) -> Action {
        if self.rng.gen_bool(probability(self.bet_probability)) {
            Action::Bet
        } else {
            Action::Check
        }
    }
}

/// Бот "по силе руки": смотрит на лучшую категорию по открытой части
/// обоих бордов.
#[derive(Clone, Copy, Debug)]
pub struct EquityBot {
    /// Ниже этой категории – фолд на ставку.
    pub fold_below: HandCategory,
    /// С этой категории и выше – ставит сам. `None` – никогда не ставит.
    pub bet_from: Option<HandCategory>,
}

impl EquityBot {
    pub fn new(fold_below: HandCategory, bet_from: Option<HandCategory>) -> Self {
        Self {
            fold_below,
            bet_from,
        }
    }

    /// Лучшая категория по двум бордам (None, если оценить нельзя).
    fn best_category(view: &BotView) -> Option<HandCategory> {
        [&view.board1, &view.board2]
            .into_iter()
            .filter_map(|board| evaluate_omaha_hand(&view.hole_cards, board).ok())
            .max()
            .map(|rank| rank.category())
    }
}

impl Default for EquityBot {
    fn default() -> Self {
        Self::new(HandCategory::OnePair, Some(HandCategory::Straight))
    }
}

impl BotPolicy for EquityBot {
    fn decide(&mut self, view: &BotView) -> BotDecision {
        let best = Self::best_category(view);
        trace!("{}: best category {:?}", view.position, best);
        match best {
            Some(cat) if cat < self.fold_below && view.facing_bet => BotDecision::Fold,
            _ => BotDecision::Continue,
        }
    }

    fn choose_action(&mut self, view: &BotView) -> Action {
        match (self.bet_from, Self::best_category(view)) {
            (Some(threshold), Some(cat)) if cat >= threshold => Action::Bet,
            _ => Action::Check,
        }
    }
}
