//! Доменная модель: номиналы фишек, наборы фишек, стоимость в очках, пресеты.

pub mod denomination;
pub mod points;
pub mod presets;

/// Идентификатор набора фишек (выдаёт репозиторий).
pub type ChipSetId = u64;

pub use denomination::*;
pub use points::*;
pub use presets::default_presets;
