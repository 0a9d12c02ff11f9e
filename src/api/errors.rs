use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TableId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Стол не найден.
    #[error("table {0} not found")]
    TableNotFound(TableId),

    /// Запрос результата до шоудауна.
    #[error("{0}")]
    NotAtShowdown(String),

    /// Ошибка движка (недопустимое действие, улица и т.п.).
    #[error("{0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::TableNotFound(id) => ApiError::TableNotFound(id),
            EngineError::NotAtShowdown(_) => ApiError::NotAtShowdown(err.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
