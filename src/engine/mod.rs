//! Калькулятор раскладки фишек.
//!
//! Основные операции:
//!   - `validate` – проверить набор перед сохранением
//!   - `check_feasibility` – на сколько игроков хватает набора по суммарной стоимости
//!   - `calculate_distribution` – раскладка по игрокам с учётом запаса каждого номинала
//!
//! Всё здесь – чистые функции над снапшотами, без I/O и общего состояния.

pub mod allocator;
pub mod config;
pub mod errors;
pub mod feasibility;
pub mod validation;

pub use allocator::{
    calculate, calculate_distribution, calculate_distribution_with, calculate_with, Calculation,
    ChipDistribution, DistributionResult,
};
pub use config::AllocatorConfig;
pub use errors::EngineError;
pub use feasibility::{aggregate_value, check_feasibility, FeasibilityResult};
pub use validation::{validate, validate_draft, ValidationReport};
