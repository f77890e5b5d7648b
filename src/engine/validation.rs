use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::denomination::{ChipSet, Denomination};
use crate::domain::points::Points;
use crate::engine::errors::EngineError;

pub const ERR_NAME_REQUIRED: &str = "name is required";
pub const ERR_NO_DENOMINATIONS: &str = "need at least one denomination";
pub const ERR_INVALID_VALUE: &str = "invalid value";
pub const ERR_INVALID_QUANTITY: &str = "invalid quantity";
pub const ERR_DUPLICATE_VALUES: &str = "duplicate values";
pub const ERR_INVALID_COLOR: &str = "invalid color";

/// Результат проверки набора: все найденные проблемы сразу,
/// чтобы UI мог показать их одним списком.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Для вызывающих, которым удобнее `?`.
    pub fn into_result(self) -> Result<(), EngineError> {
        if self.valid {
            Ok(())
        } else {
            Err(EngineError::InvalidChipSet(self.errors))
        }
    }
}

/// Проверка набора перед сохранением.
///
/// Правила не прерываются на первой ошибке:
///   - имя (после trim) не пустое;
///   - есть хотя бы один номинал;
///   - номинал > 0;
///   - количество >= 1 (в сохранённом наборе нулевые количества запрещены);
///   - номиналы не повторяются;
///   - цвет не пустой.
pub fn validate(chip_set: &ChipSet) -> ValidationReport {
    let mut errors = Vec::new();

    if chip_set.name.trim().is_empty() {
        errors.push(ERR_NAME_REQUIRED.to_string());
    }

    if chip_set.denominations.is_empty() {
        errors.push(ERR_NO_DENOMINATIONS.to_string());
    }

    check_rows(&chip_set.denominations, true, &mut errors);

    ValidationReport::from_errors(errors)
}

/// Проверка набора в процессе редактирования.
///
/// Имя не проверяется, нулевые количества допустимы
/// (такие номиналы просто не участвуют в расчётах).
pub fn validate_draft(denominations: &[Denomination]) -> ValidationReport {
    let mut errors = Vec::new();
    check_rows(denominations, false, &mut errors);
    ValidationReport::from_errors(errors)
}

fn check_rows(denominations: &[Denomination], require_quantity: bool, errors: &mut Vec<String>) {
    for (idx, d) in denominations.iter().enumerate() {
        let row = idx + 1;

        if d.value.is_zero() {
            errors.push(format!("{}: row {} has value {}", ERR_INVALID_VALUE, row, d.value));
        }
        if require_quantity && d.quantity < 1 {
            errors.push(format!(
                "{}: row {} has quantity {}",
                ERR_INVALID_QUANTITY, row, d.quantity
            ));
        }
        if d.color.trim().is_empty() {
            errors.push(format!("{}: row {} has no color", ERR_INVALID_COLOR, row));
        }
    }

    // BTreeMap, чтобы сообщения о дубликатах шли в порядке номиналов.
    let mut seen: BTreeMap<Points, usize> = BTreeMap::new();
    for d in denominations {
        *seen.entry(d.value).or_insert(0) += 1;
    }
    for (value, count) in seen {
        if count > 1 {
            errors.push(format!(
                "{}: value {} appears {} times",
                ERR_DUPLICATE_VALUES, value, count
            ));
        }
    }
}
