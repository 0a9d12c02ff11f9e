use core::fmt;

use serde::{Deserialize, Serialize};

/// Улица раздачи.
///
/// Bomb pot начинается сразу с флопа (префлопа нет), дальше строго вперёд:
/// Flop → Turn → River → Showdown. Showdown – терминальная.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Street {
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Следующая улица. Для Showdown – None.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => Some(Street::Showdown),
            Street::Showdown => None,
        }
    }

    /// Сколько карт каждого борда открыто на этой улице.
    pub fn visible_board_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Street::Showdown
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        };
        f.write_str(name)
    }
}

/// Ранг руки (категория + 5 рангов-кикеров), упакованный в u32.
///
/// Естественный порядок u32 совпадает с силой руки,
/// кодирование и разбор – в `eval::hand_rank`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets_move_forward_only() {
        assert_eq!(Street::Flop.next(), Some(Street::Turn));
        assert_eq!(Street::Turn.next(), Some(Street::River));
        assert_eq!(Street::River.next(), Some(Street::Showdown));
        assert_eq!(Street::Showdown.next(), None);
    }

    #[test]
    fn reveal_counts() {
        assert_eq!(Street::Flop.visible_board_cards(), 3);
        assert_eq!(Street::Turn.visible_board_cards(), 4);
        assert_eq!(Street::River.visible_board_cards(), 5);
        assert_eq!(Street::Showdown.visible_board_cards(), 5);
    }
}
