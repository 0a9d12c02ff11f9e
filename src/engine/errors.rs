use crate::domain::{Position, Street, TableId};

use thiserror::Error;

/// Ошибки движка bomb pot.
///
/// Все ошибки локальные и восстановимые: движок возвращает их вызывающему
/// коду и никогда не подставляет "заглушечный" результат.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("В колоде недостаточно карт: нужно {requested}, осталось {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("Место {0} не может сейчас ходить")]
    InvalidActor(Position),

    #[error("Действие недопустимо на улице {0}")]
    InvalidStreet(Street),

    #[error("Раздача ещё не дошла до шоудауна (улица {0})")]
    NotAtShowdown(Street),

    #[error("Позиции {0} нет за столом")]
    UnknownPosition(String),

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(String),

    #[error("Неверное число карт: ожидалось {expected}, получено {actual}")]
    InvalidCardCount { expected: usize, actual: usize },

    #[error("Борда с номером {0} нет (есть только 1 и 2)")]
    InvalidBoard(u8),

    #[error("На шоудауне не осталось ни одного места")]
    NoContenders,

    #[error("Стол {0} не найден")]
    TableNotFound(TableId),

    #[error("Раздача не активна")]
    NoActiveHand,
}
