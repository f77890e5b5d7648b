use crate::domain::ChipSetId;

use thiserror::Error;

/// Ошибки ядра калькулятора и репозитория наборов.
///
/// Сам расчёт раскладки никогда не падает: нехватка фишек
/// сообщается через `warnings`, а не через `Err`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Набор фишек {0} не найден")]
    ChipSetNotFound(ChipSetId),

    #[error("Набор фишек {0} встроенный, его нельзя удалить")]
    PresetProtected(ChipSetId),

    #[error("Набор фишек не прошёл проверку: {}", .0.join("; "))]
    InvalidChipSet(Vec<String>),

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    #[error("Не удалось разобрать конфигурацию: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Не удалось прочитать файл конфигурации: {0}")]
    Io(#[from] std::io::Error),
}
