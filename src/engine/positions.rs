use crate::domain::{Position, Seat, SeatIndex};

/// Найти место по метке позиции.
pub fn seat_index_of(seats: &[Seat], position: &Position) -> Option<SeatIndex> {
    seats
        .iter()
        .position(|s| &s.position == position)
        .map(|i| i as SeatIndex)
}

/// Несфолдившие места в порядке ростера – очередь хода на новой улице.
pub fn collect_active_seats(seats: &[Seat]) -> Vec<SeatIndex> {
    seats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_in_hand())
        .map(|(i, _)| i as SeatIndex)
        .collect()
}

/// Сколько мест ещё в раздаче.
pub fn count_active_seats(seats: &[Seat]) -> usize {
    seats.iter().filter(|s| s.is_in_hand()).count()
}

/// Места, которые должны отреагировать на ставку `bettor`:
/// все остальные несфолдившие боты, по кругу начиная со следующего за ним.
pub fn seats_reacting_to_bet(seats: &[Seat], bettor: SeatIndex) -> Vec<SeatIndex> {
    let n = seats.len();
    (1..n)
        .map(|offset| (bettor as usize + offset) % n)
        .filter(|&i| seats[i].is_in_hand() && seats[i].is_bot())
        .map(|i| i as SeatIndex)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(labels: &[&str], hero: &str) -> Vec<Seat> {
        labels
            .iter()
            .map(|l| Seat::new(Position::new(*l), *l == hero))
            .collect()
    }

    #[test]
    fn reacting_order_wraps_and_skips_hero_and_folded() {
        let mut s = seats(&["SB", "BB", "EP", "MP"], "BB");
        s[3].folded = true;

        // Ставит EP: реагируют только SB (после круга); BB – герой, MP – сфолдил.
        assert_eq!(seats_reacting_to_bet(&s, 2), vec![0]);
        // Ставит герой: реагируют EP, SB.
        assert_eq!(seats_reacting_to_bet(&s, 1), vec![2, 0]);
    }

    #[test]
    fn active_seats_in_roster_order() {
        let mut s = seats(&["SB", "BB", "EP"], "EP");
        s[1].folded = true;
        assert_eq!(collect_active_seats(&s), vec![0, 2]);
        assert_eq!(count_active_seats(&s), 2);
        assert_eq!(seat_index_of(&s, &Position::new("EP")), Some(2));
        assert_eq!(seat_index_of(&s, &Position::new("CO")), None);
    }
}
