//! Интеграционные тесты для доменной модели (crate::domain).

use bombpot_engine::domain::*;
use bombpot_engine::engine::EngineError;

/// Карты: разбор ASCII и значков мастей, отображение.
#[test]
fn card_parse_and_display() {
    let ace: Card = "As".parse().unwrap();
    assert_eq!(ace, Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(ace.to_string(), "As");

    let ten: Card = "10♥".parse().unwrap();
    assert_eq!(ten, Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(ten.glyph(), "10♥");
    assert_eq!("T\u{2665}\u{FE0F}".parse::<Card>().unwrap(), ten);

    assert_eq!("".parse::<Card>(), Err(CardParseError::Empty));
    assert!(matches!("1s".parse::<Card>(), Err(CardParseError::InvalidRank(_))));
    assert!(matches!("Ax".parse::<Card>(), Err(CardParseError::InvalidSuit(_))));
}

/// Улицы: строго вперёд, число открытых карт.
#[test]
fn street_progression() {
    assert_eq!(Street::Flop.next(), Some(Street::Turn));
    assert_eq!(Street::Turn.next(), Some(Street::River));
    assert_eq!(Street::River.next(), Some(Street::Showdown));
    assert_eq!(Street::Showdown.next(), None);

    let visible: Vec<usize> = [Street::Flop, Street::Turn, Street::River, Street::Showdown]
        .iter()
        .map(|s| s.visible_board_cards())
        .collect();
    assert_eq!(visible, vec![3, 4, 5, 5]);
    assert!(Street::Showdown.is_terminal());
    assert!(Street::Flop < Street::River);
}

/// Борд: видимая часть по улицам, номера бордов.
#[test]
fn board_visibility_and_ids() {
    let cards: Vec<Card> = ["2c", "3d", "4h", "5s", "6c"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let board = Board::new(BoardId::Second, cards.clone());

    assert_eq!(board.visible(Street::Flop), &cards[..3]);
    assert_eq!(board.visible(Street::Turn), &cards[..4]);
    assert_eq!(board.visible(Street::River), &cards[..]);

    assert_eq!(BoardId::from_number(1), Some(BoardId::First));
    assert_eq!(BoardId::from_number(2), Some(BoardId::Second));
    assert_eq!(BoardId::from_number(3), None);
    assert_eq!(BoardId::Second.number(), 2);
    assert_eq!(BoardId::First.to_string(), "board1");
}

/// Конфиг стола: пресеты и проверки.
#[test]
fn table_config_presets_and_validation() {
    let six = TableConfig::six_max();
    assert_eq!(six.seat_count(), 6);
    assert_eq!(six.cards_needed(), 34);
    assert_eq!(six.index_of(&Position::new("EP")), Some(2));
    assert_eq!(TableConfig::default(), six);

    let seven = TableConfig::seven_max();
    assert_eq!(seven.positions[0], "BTN");
    assert_eq!(seven.cards_needed(), 38);

    assert_eq!(TableConfig::six_max_utg().positions[0], "UTG");

    assert!(matches!(
        TableConfig::new(["SB"]),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        TableConfig::new(["SB", " "]),
        Err(EngineError::InvalidConfig(_))
    ));
    let eleven: Vec<String> = (0..11).map(|i| format!("S{i}")).collect();
    assert!(TableConfig::new(eleven).is_err());
}

/// Конфиг стола из JSON (hole_cards по умолчанию 4).
#[test]
fn table_config_from_json() {
    let config = TableConfig::from_json_str(r#"{"positions":["BTN","SB","BB"]}"#).unwrap();
    assert_eq!(config.hole_cards, OMAHA_HOLE_CARDS);
    assert_eq!(config.seat_count(), 3);

    assert!(TableConfig::from_json_str(r#"{"positions":["BTN","BTN"]}"#).is_err());
    assert!(TableConfig::from_json_str("[]").is_err());
}

/// Место: герой / бот / в раздаче.
#[test]
fn seat_flags() {
    let mut seat = Seat::new(Position::from("CO"), false);
    assert!(seat.is_bot());
    assert!(seat.is_in_hand());
    seat.folded = true;
    assert!(!seat.is_in_hand());

    let hero = Seat::new(Position::from("EP".to_string()), true);
    assert!(!hero.is_bot());
}
