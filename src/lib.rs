//! Калькулятор раскладки фишек для домашнего покера.
//!
//! По набору номиналов с ограниченным количеством, числу игроков и целевому
//! стеку считает, сколько фишек каждого номинала получает игрок, не выходя
//! за физический запас, и на сколько игроков набора вообще хватает.
//!
//! Слои:
//! - domain – номиналы, наборы, очки, пресеты;
//! - engine – проверка набора, ёмкость, раскладка;
//! - infra – хранилище наборов, id;
//! - api – команды/запросы для UI и экспорт в текст.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
