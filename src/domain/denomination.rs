// src/domain/denomination.rs

use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::ChipSetId;

/// Один номинал фишек в наборе.
/// Пример: value = 25, quantity = 40, color = "green", name = Some("Quarter").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Denomination {
    /// Номинал одной фишки.
    pub value: Points,
    /// Сколько физических фишек этого номинала есть в коробке.
    /// 0 допустим при редактировании: такой номинал игнорируется в расчётах.
    pub quantity: u64,
    /// Цвет фишки (идентификатор для UI, например "red" или "#ff0000").
    pub color: String,
    /// Отображаемое имя (необязательно).
    #[serde(default)]
    pub name: Option<String>,
}

impl Denomination {
    pub fn new(value: u64, quantity: u64, color: impl Into<String>) -> Self {
        Self {
            value: Points(value),
            quantity,
            color: color.into(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Имя для отображения: `name`, если оно задано и не пустое, иначе номинал.
    pub fn label(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.value.to_string(),
        }
    }

    /// Суммарная стоимость всех фишек этого номинала.
    pub fn total_value(&self) -> Points {
        self.value * self.quantity
    }

    /// Участвует ли номинал в расчётах.
    pub fn is_usable(&self) -> bool {
        self.quantity > 0 && !self.value.is_zero()
    }
}

/// Именованный набор фишек (каталог номиналов).
///
/// Наборы хранит внешний репозиторий (`infra::persistence`),
/// ядро получает их снапшотом и только читает.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipSet {
    pub id: ChipSetId,
    pub name: String,
    pub denominations: Vec<Denomination>,
    /// Встроенный набор: удалять нельзя, редактирование создаёт копию.
    #[serde(default)]
    pub is_preset: bool,
}

impl ChipSet {
    pub fn new(id: ChipSetId, name: impl Into<String>, denominations: Vec<Denomination>) -> Self {
        Self {
            id,
            name: name.into(),
            denominations,
            is_preset: false,
        }
    }

    /// Суммарная стоимость всех фишек набора.
    pub fn total_value(&self) -> Points {
        self.denominations
            .iter()
            .filter(|d| d.is_usable())
            .map(Denomination::total_value)
            .sum()
    }

    /// Общее количество физических фишек в наборе.
    pub fn total_chips(&self) -> u64 {
        self.denominations
            .iter()
            .map(|d| d.quantity)
            .fold(0u64, u64::saturating_add)
    }

    pub fn denomination_by_value(&self, value: Points) -> Option<&Denomination> {
        self.denominations.iter().find(|d| d.value == value)
    }
}
