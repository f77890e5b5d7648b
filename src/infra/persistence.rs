use serde::{Deserialize, Serialize};

use crate::domain::denomination::{ChipSet, Denomination};
use crate::domain::presets::default_presets;
use crate::domain::ChipSetId;
use crate::engine::errors::EngineError;
use crate::engine::validation::validate;
use crate::infra::ids::IdGenerator;

/// Частичное изменение набора: `None` – поле не трогаем.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipSetPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub denominations: Option<Vec<Denomination>>,
}

/// Абстракция хранилища наборов фишек.
///
/// Настоящее хранилище живёт вне ядра (БД приложения),
/// эта абстракция нужна для тестов и оффлайн-режима.
/// Ядро получает наборы только снапшотами (клонами).
pub trait ChipSetRepository {
    /// Все наборы в порядке создания.
    fn list(&self) -> Vec<ChipSet>;

    fn get(&self, id: ChipSetId) -> Option<ChipSet>;

    /// Создать пользовательский набор (проходит `validate`).
    fn create(&mut self, name: &str, denominations: Vec<Denomination>) -> Result<ChipSet, EngineError>;

    /// Изменить набор. Для пресета создаётся копия, сам пресет не меняется.
    fn update(&mut self, id: ChipSetId, patch: ChipSetPatch) -> Result<ChipSet, EngineError>;

    /// Удалить набор. Пресеты удалять нельзя.
    fn delete(&mut self, id: ChipSetId) -> Result<(), EngineError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryChipSetRepository {
    chip_sets: Vec<ChipSet>,
    ids: IdGenerator,
}

impl InMemoryChipSetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Репозиторий с уже загруженными встроенными наборами.
    pub fn with_presets() -> Self {
        Self {
            chip_sets: default_presets(),
            ids: IdGenerator::new(),
        }
    }

    fn position(&self, id: ChipSetId) -> Result<usize, EngineError> {
        self.chip_sets
            .iter()
            .position(|c| c.id == id)
            .ok_or(EngineError::ChipSetNotFound(id))
    }
}

impl ChipSetRepository for InMemoryChipSetRepository {
    fn list(&self) -> Vec<ChipSet> {
        self.chip_sets.clone()
    }

    fn get(&self, id: ChipSetId) -> Option<ChipSet> {
        self.chip_sets.iter().find(|c| c.id == id).cloned()
    }

    fn create(&mut self, name: &str, denominations: Vec<Denomination>) -> Result<ChipSet, EngineError> {
        let mut chip_set = ChipSet::new(0, name.trim(), denominations);
        validate(&chip_set).into_result()?;

        chip_set.id = self.ids.next_chip_set_id();
        log::info!("created chip set {} '{}'", chip_set.id, chip_set.name);

        self.chip_sets.push(chip_set.clone());
        Ok(chip_set)
    }

    fn update(&mut self, id: ChipSetId, patch: ChipSetPatch) -> Result<ChipSet, EngineError> {
        let idx = self.position(id)?;
        let mut updated = self.chip_sets[idx].clone();
        let is_preset = updated.is_preset;

        if let Some(name) = patch.name {
            updated.name = name.trim().to_string();
        } else if is_preset {
            updated.name = format!("{} (copy)", updated.name);
        }
        if let Some(denominations) = patch.denominations {
            updated.denominations = denominations;
        }

        validate(&updated).into_result()?;

        if is_preset {
            // Пресет не трогаем: правка превращается в новый пользовательский набор.
            updated.id = self.ids.next_chip_set_id();
            updated.is_preset = false;
            log::info!(
                "preset {} edited, saved as new chip set {} '{}'",
                id,
                updated.id,
                updated.name
            );
            self.chip_sets.push(updated.clone());
        } else {
            log::info!("updated chip set {} '{}'", updated.id, updated.name);
            self.chip_sets[idx] = updated.clone();
        }

        Ok(updated)
    }

    fn delete(&mut self, id: ChipSetId) -> Result<(), EngineError> {
        let idx = self.position(id)?;

        if self.chip_sets[idx].is_preset {
            log::warn!("refusing to delete preset chip set {}", id);
            return Err(EngineError::PresetProtected(id));
        }

        let removed = self.chip_sets.remove(idx);
        log::info!("deleted chip set {} '{}'", removed.id, removed.name);
        Ok(())
    }
}
