// src/engine/table_manager.rs

use std::collections::HashMap;

use log::info;

use crate::domain::{HandId, Position, TableConfig, TableId};
use crate::engine::{self, Action, BotDecision, BotPolicy, EngineError, HandState, RandomSource};
use crate::infra::{IdGenerator, RngSeed};

/// Внутренний объект: один стол + опционально текущая раздача.
struct ManagedTable {
    config: TableConfig,
    seed: RngSeed,
    hand: Option<HandState>,
    hands_played: u64,
}

/// Менеджер столов:
/// - хранит несколько независимых столов по TableId;
/// - у каждого стола не больше одной раздачи; новая раздача заменяет старую;
/// - даёт методы start_hand/apply_action/respond_to_bet/step_bot/play_bots
///   поверх engine::*.
pub struct TableManager {
    tables: HashMap<TableId, ManagedTable>,
    ids: IdGenerator,
}

impl TableManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Добавить стол. Колоды его раздач выводятся из `seed`,
    /// поэтому одинаковый seed даёт одинаковую серию раздач.
    pub fn add_table(&mut self, config: TableConfig, seed: RngSeed) -> Result<TableId, EngineError> {
        config.validate()?;
        let table_id = self.ids.next_table_id();
        self.tables.insert(
            table_id,
            ManagedTable {
                config,
                seed,
                hand: None,
                hands_played: 0,
            },
        );
        Ok(table_id)
    }

    /// Текущая раздача стола (read-only).
    pub fn hand(&self, table_id: TableId) -> Option<&HandState> {
        self.tables.get(&table_id).and_then(|mt| mt.hand.as_ref())
    }

    pub fn hands_played(&self, table_id: TableId) -> Option<u64> {
        self.tables.get(&table_id).map(|mt| mt.hands_played)
    }

    /// Запустить новую раздачу с колодой из seed стола.
    pub fn start_hand(&mut self, table_id: TableId, hero: &Position) -> Result<&HandState, EngineError> {
        let hand_id = self.ids.next_hand_id();
        let mt = self
            .tables
            .get(&table_id)
            .ok_or(EngineError::TableNotFound(table_id))?;
        let mut rng = mt.seed.derive(table_id, hand_id, mt.hands_played).to_rng();
        self.start_hand_with(table_id, hero, &mut rng, hand_id)
    }

    /// Запустить новую раздачу с внешним источником случайности.
    /// Предыдущая раздача стола (если была) отбрасывается.
    pub fn start_hand_with<R: RandomSource + ?Sized>(
        &mut self,
        table_id: TableId,
        hero: &Position,
        rng: &mut R,
        hand_id: HandId,
    ) -> Result<&HandState, EngineError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(EngineError::TableNotFound(table_id))?;

        let hand = engine::new_hand(&mt.config, hero, rng, hand_id)?;
        mt.hands_played += 1;
        info!("table {table_id}: hand #{} ({hand_id})", mt.hands_played);

        Ok(mt.hand.insert(hand))
    }

    /// Применить действие места на конкретном столе.
    pub fn apply_action<P: BotPolicy + ?Sized>(
        &mut self,
        table_id: TableId,
        position: &Position,
        action: Action,
        policy: &mut P,
    ) -> Result<&HandState, EngineError> {
        self.update_hand(table_id, |hand| {
            engine::apply_action(hand, position, action, policy)
        })
    }

    /// Ответ героя на ставку бота.
    pub fn respond_to_bet(
        &mut self,
        table_id: TableId,
        position: &Position,
        decision: BotDecision,
    ) -> Result<&HandState, EngineError> {
        self.update_hand(table_id, |hand| engine::respond_to_bet(hand, position, decision))
    }

    /// Доиграть за ботов до хода героя или шоудауна.
    pub fn play_bots<P: BotPolicy + ?Sized>(
        &mut self,
        table_id: TableId,
        policy: &mut P,
    ) -> Result<&HandState, EngineError> {
        self.update_hand(table_id, |hand| engine::play_bots(hand, policy))
    }

    /// Один ход бота, чья сейчас очередь.
    pub fn step_bot<P: BotPolicy + ?Sized>(
        &mut self,
        table_id: TableId,
        policy: &mut P,
    ) -> Result<&HandState, EngineError> {
        self.update_hand(table_id, |hand| engine::step_bot(hand, policy))
    }

    /// Заменить снимок раздачи результатом перехода (только при успехе).
    fn update_hand<F>(&mut self, table_id: TableId, transition: F) -> Result<&HandState, EngineError>
    where
        F: FnOnce(&HandState) -> Result<HandState, EngineError>,
    {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(EngineError::TableNotFound(table_id))?;
        let current = mt.hand.as_ref().ok_or(EngineError::NoActiveHand)?;
        let next = transition(current)?;
        Ok(mt.hand.insert(next))
    }
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}
