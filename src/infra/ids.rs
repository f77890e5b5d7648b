use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::presets::FIRST_USER_ID;
use crate::domain::ChipSetId;

/// Генерация id наборов на основе монотонного счётчика.
///
/// Пользовательские наборы начинаются с `FIRST_USER_ID`,
/// чтобы не пересекаться с id встроенных пресетов.
#[derive(Debug)]
pub struct IdGenerator {
    chip_set_counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(FIRST_USER_ID)
    }

    pub fn starting_at(first: ChipSetId) -> Self {
        Self {
            chip_set_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_chip_set_id(&self) -> ChipSetId {
        self.chip_set_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
