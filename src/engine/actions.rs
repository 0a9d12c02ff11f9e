use core::fmt;

use serde::{Deserialize, Serialize};

/// Действие места на своём ходу.
///
/// Упрощённый раунд bomb pot: bet не имеет размера, это сигнал остальным –
/// каждый не сфолдивший бот решает, продолжать или сбросить.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Check,
    Bet,
    /// Добровольный фолд на своём ходу. Последнее место фолдить не может.
    Fold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Check => "check",
            Action::Bet => "bet",
            Action::Fold => "fold",
        };
        f.write_str(name)
    }
}

/// Реакция бота на ставку.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BotDecision {
    Fold,
    Continue,
}
