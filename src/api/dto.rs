use serde::{Deserialize, Serialize};

use crate::domain::denomination::ChipSet;
use crate::domain::points::Points;
use crate::domain::ChipSetId;
use crate::engine::allocator::Calculation;

/// Краткое описание набора для списка в UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipSetSummaryDto {
    pub id: ChipSetId,
    pub name: String,
    pub is_preset: bool,
    pub denomination_count: usize,
    pub total_chips: u64,
    pub total_value: Points,
}

impl From<&ChipSet> for ChipSetSummaryDto {
    fn from(chip_set: &ChipSet) -> Self {
        Self {
            id: chip_set.id,
            name: chip_set.name.clone(),
            is_preset: chip_set.is_preset,
            denomination_count: chip_set.denominations.len(),
            total_chips: chip_set.total_chips(),
            total_value: chip_set.total_value(),
        }
    }
}

/// Результат расчёта вместе с нормализованным вводом, на котором он получен.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculationViewDto {
    pub chip_set_id: ChipSetId,
    pub target_value: Points,
    pub player_count: u64,
    pub calculation: Calculation,
}
