//! Внешний API калькулятора.
//!
//! Здесь описываются:
//! - команды (commands.rs) — создание/правка/удаление наборов фишек;
//! - запросы (queries.rs) — список наборов, расчёт, экспорт;
//! - DTO (dto.rs) — удобные структуры для UI;
//! - экспорт (export.rs) — текст раскладки для буфера обмена;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod export;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use export::format_for_clipboard;
pub use queries::*;
