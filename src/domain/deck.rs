use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Колода карт. В домене это просто упорядоченный список карт,
/// который расходуется с начала (индекс 0 = верх колоды).
///
/// Одна колода живёт ровно одну раздачу: сданные карты назад не возвращаются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода из заранее заданного порядка (например, для реплея).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешать колоду источником случайности из engine/infra.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Result<Card, EngineError> {
        let mut taken = self.draw_n(1)?;
        taken.pop().ok_or(EngineError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })
    }

    /// Взять n карт сверху.
    ///
    /// Если карт не хватает – колода не меняется и возвращается
    /// `InsufficientCards`.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if n > self.cards.len() {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_is_canonical_and_unique() {
        let deck = Deck::standard_52();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.cards[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(deck.cards[51], Card::new(Rank::Ace, Suit::Spades));

        let mut sorted = deck.cards.clone();
        sorted.sort_by_key(|c| (c.suit, c.rank));
        sorted.dedup();
        assert_eq!(sorted.len(), 52);
    }

    #[test]
    fn draw_takes_from_front() {
        let mut deck = Deck::standard_52();
        let first = deck.draw_n(3).unwrap();
        assert_eq!(
            first,
            vec![
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Three, Suit::Clubs),
                Card::new(Rank::Four, Suit::Clubs),
            ]
        );
        assert_eq!(deck.len(), 49);
        assert_eq!(deck.draw_one().unwrap(), Card::new(Rank::Five, Suit::Clubs));
    }

    #[test]
    fn overdraw_fails_and_keeps_deck() {
        let mut deck = Deck::standard_52();
        deck.draw_n(50).unwrap();

        let err = deck.draw_n(3).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientCards {
                requested: 3,
                remaining: 2
            }
        ));
        assert_eq!(deck.len(), 2);
    }
}
