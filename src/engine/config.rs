use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

pub const ENV_DIVERSIFY: &str = "CHIPCALC_DIVERSIFY";
pub const ENV_MIN_DISTINCT: &str = "CHIPCALC_MIN_DISTINCT";

/// Настройки раскладчика.
///
/// Второй проход (диверсификация) это эвристика: если раскладка получилась
/// из слишком малого числа номиналов, часть крупных фишек разменивается
/// на мелкие той же суммой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Включён ли проход диверсификации.
    pub diversify: bool,
    /// Диверсифицировать, если различных номиналов в раскладке меньше этого числа.
    pub min_distinct_denominations: usize,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            diversify: true,
            min_distinct_denominations: 2,
        }
    }
}

impl AllocatorConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_distinct_denominations == 0 {
            return Err(EngineError::InvalidConfig(
                "min_distinct_denominations must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Разобрать JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        let cfg: AllocatorConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let s = fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    /// Переопределить поля из переменных окружения (пустые значения игнорируются).
    pub fn apply_env(mut self) -> Result<Self, EngineError> {
        if let Ok(v) = std::env::var(ENV_DIVERSIFY) {
            if !v.is_empty() {
                self.diversify = parse_bool(&v).ok_or_else(|| {
                    EngineError::InvalidConfig(format!("{}: invalid bool '{}'", ENV_DIVERSIFY, v))
                })?;
            }
        }
        if let Ok(v) = std::env::var(ENV_MIN_DISTINCT) {
            if !v.is_empty() {
                self.min_distinct_denominations = v.parse().map_err(|_| {
                    EngineError::InvalidConfig(format!("{}: invalid number '{}'", ENV_MIN_DISTINCT, v))
                })?;
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Default + переменные окружения.
    pub fn load() -> Result<Self, EngineError> {
        Self::default().apply_env()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = AllocatorConfig::from_json_str(r#"{ "diversify": false }"#).unwrap();
        assert!(!cfg.diversify);
        assert_eq!(cfg.min_distinct_denominations, 2);
    }

    #[test]
    fn zero_min_distinct_is_rejected() {
        let err = AllocatorConfig::from_json_str(r#"{ "min_distinct_denominations": 0 }"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn broken_json_is_a_config_error() {
        let err = AllocatorConfig::from_json_str("{ diversify").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
