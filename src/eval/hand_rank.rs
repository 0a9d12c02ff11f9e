use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    fn from_id(id: u8) -> Option<HandCategory> {
        HandCategory::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 рангов (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 (2..A) влазит в 4 бита. Неиспользуемые кикеры = 0,
    /// поэтому сравнение u32 – это лексикографическое сравнение
    /// (категория, r0, ..., r4).
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, r) in ranks.iter().take(5).enumerate() {
            value |= (r.value() as u32) << (16 - 4 * i);
        }
        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as u8;
        HandCategory::from_id(cat_id).unwrap_or(HandCategory::HighCard)
    }

    /// Значимые ранги (от старшего к младшему) без пустых позиций.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..5)
            .map(|i| ((self.0 >> (16 - 4 * i)) & 0x0F) as u8)
            .filter_map(Rank::from_value)
            .collect()
    }
}

/// Сравнение двух оценённых рук: строгое, без допусков.
/// `Equal` только при полном совпадении категории и всех кикеров.
pub fn compare_hands(a: HandRank, b: HandRank) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| a.ranks().cmp(&b.ranks()))
}

/// Человеческое описание руки: категория + значимые ранги.
/// Например: "Straight (5 4 3 2 A)".
pub fn describe_hand(rank: HandRank) -> String {
    let ranks: Vec<String> = rank.ranks().iter().map(|r| r.to_string()).collect();
    format!("{} ({})", rank.category(), ranks.join(" "))
}
