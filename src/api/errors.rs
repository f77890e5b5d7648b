use serde::{Deserialize, Serialize};

use crate::domain::ChipSetId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Набор не найден.
    ChipSetNotFound(ChipSetId),

    /// Попытка удалить встроенный набор.
    PresetProtected(ChipSetId),

    /// Набор не прошёл проверку: список сообщений для формы.
    Validation(Vec<String>),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ChipSetNotFound(id) => ApiError::ChipSetNotFound(id),
            EngineError::PresetProtected(id) => ApiError::PresetProtected(id),
            EngineError::InvalidChipSet(errors) => ApiError::Validation(errors),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
