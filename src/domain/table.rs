use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::board::Board;
use crate::domain::seat::Position;
use crate::engine::errors::EngineError;

/// Индекс места за столом (индекс позиции в ростере).
pub type SeatIndex = u8;

/// Количество бордов в bomb pot dual-board.
pub const BOARD_COUNT: usize = 2;

/// Карманных карт на место в омахе.
pub const OMAHA_HOLE_CARDS: usize = 4;

/// Минимум/максимум мест. Максимум ограничен колодой: 4 × 10 + 10 = 50 ≤ 52.
pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 10;

/// Конфиг стола: ростер позиций и сколько карманных карт раздаётся.
///
/// Порядок позиций в ростере – это и порядок раздачи, и порядок хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub positions: Vec<Position>,
    #[serde(default = "default_hole_cards")]
    pub hole_cards: usize,
}

fn default_hole_cards() -> usize {
    OMAHA_HOLE_CARDS
}

impl TableConfig {
    /// Конфиг из произвольного ростера (с валидацией).
    pub fn new<I, P>(positions: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let config = Self {
            positions: positions.into_iter().map(Into::into).collect(),
            hole_cards: OMAHA_HOLE_CARDS,
        };
        config.validate()?;
        Ok(config)
    }

    /// 6-max: SB, BB, EP, MP, HJ, CO.
    pub fn six_max() -> Self {
        Self::preset(&["SB", "BB", "EP", "MP", "HJ", "CO"])
    }

    /// 6-max в варианте с UTG и баттоном.
    pub fn six_max_utg() -> Self {
        Self::preset(&["UTG", "MP", "HJ", "CO", "BTN", "SB"])
    }

    /// 7-max: BTN, CO, HJ, MP, EP, SB, BB.
    pub fn seven_max() -> Self {
        Self::preset(&["BTN", "CO", "HJ", "MP", "EP", "SB", "BB"])
    }

    fn preset(labels: &[&str]) -> Self {
        Self {
            positions: labels.iter().map(|l| Position::new(*l)).collect(),
            hole_cards: OMAHA_HOLE_CARDS,
        }
    }

    /// Загрузить конфиг из JSON и проверить его.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: TableConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn seat_count(&self) -> usize {
        self.positions.len()
    }

    /// Сколько карт уходит из колоды на одну раздачу.
    pub fn cards_needed(&self) -> usize {
        self.hole_cards * self.positions.len() + Board::SIZE * BOARD_COUNT
    }

    /// Индекс позиции в ростере.
    pub fn index_of(&self, position: &Position) -> Option<SeatIndex> {
        self.positions
            .iter()
            .position(|p| p == position)
            .map(|i| i as SeatIndex)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let n = self.positions.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&n) {
            return Err(EngineError::InvalidConfig(format!(
                "за столом должно быть от {MIN_SEATS} до {MAX_SEATS} мест, задано {n}"
            )));
        }

        if self.hole_cards != OMAHA_HOLE_CARDS {
            return Err(EngineError::InvalidConfig(format!(
                "омаха требует {OMAHA_HOLE_CARDS} карманные карты, задано {}",
                self.hole_cards
            )));
        }

        let mut seen = HashSet::new();
        for p in &self.positions {
            if p.as_str().trim().is_empty() {
                return Err(EngineError::InvalidConfig("пустая метка позиции".into()));
            }
            if !seen.insert(p.as_str()) {
                return Err(EngineError::InvalidConfig(format!(
                    "позиция {p} встречается дважды"
                )));
            }
        }

        if self.cards_needed() > 52 {
            return Err(EngineError::InsufficientCards {
                requested: self.cards_needed(),
                remaining: 52,
            });
        }

        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::six_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for cfg in [
            TableConfig::six_max(),
            TableConfig::six_max_utg(),
            TableConfig::seven_max(),
        ] {
            assert!(cfg.validate().is_ok(), "{:?}", cfg.positions);
        }
        assert_eq!(TableConfig::seven_max().cards_needed(), 38);
    }

    #[test]
    fn rejects_duplicates_and_sizes() {
        assert!(matches!(
            TableConfig::new(["SB", "SB", "BB"]),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            TableConfig::new(["SB"]),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            TableConfig::new(["SB", ""]),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn loads_from_json() {
        let cfg = TableConfig::from_json_str(r#"{"positions":["SB","BB","BTN"]}"#).unwrap();
        assert_eq!(cfg.hole_cards, OMAHA_HOLE_CARDS);
        assert_eq!(cfg.index_of(&Position::new("BTN")), Some(2));

        let bad = TableConfig::from_json_str(r#"{"positions":["SB","BB"],"hole_cards":2}"#);
        assert!(matches!(bad, Err(EngineError::InvalidConfig(_))));
    }
}
