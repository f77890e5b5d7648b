// src/domain/presets.rs

use crate::domain::denomination::{ChipSet, Denomination};
use crate::domain::ChipSetId;

/// Id встроенных наборов. Пользовательские наборы получают id начиная с `FIRST_USER_ID`.
pub const STANDARD_300_ID: ChipSetId = 1;
pub const HOME_GAME_500_ID: ChipSetId = 2;
pub const FIRST_USER_ID: ChipSetId = 100;

/// Классический кейс на 300 фишек.
pub fn standard_300() -> ChipSet {
    ChipSet {
        id: STANDARD_300_ID,
        name: "Standard 300".to_string(),
        denominations: vec![
            Denomination::new(1, 100, "white"),
            Denomination::new(5, 75, "red"),
            Denomination::new(25, 50, "green"),
            Denomination::new(100, 50, "black"),
            Denomination::new(500, 25, "purple"),
        ],
        is_preset: true,
    }
}

/// Домашний набор на 500 фишек, номиналы от 5 до 100.
pub fn home_game_500() -> ChipSet {
    ChipSet {
        id: HOME_GAME_500_ID,
        name: "Home Game 500".to_string(),
        denominations: vec![
            Denomination::new(5, 150, "white"),
            Denomination::new(10, 150, "red"),
            Denomination::new(25, 100, "blue"),
            Denomination::new(100, 100, "black"),
        ],
        is_preset: true,
    }
}

/// Все встроенные наборы в порядке показа в UI.
pub fn default_presets() -> Vec<ChipSet> {
    vec![standard_300(), home_game_500()]
}
