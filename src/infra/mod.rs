//! Инфраструктурный слой вокруг калькулятора:
//! - генерация id наборов;
//! - абстракция хранилища наборов фишек (in-memory для тестов и оффлайна).

pub mod ids;
pub mod persistence;

pub use ids::*;
pub use persistence::*;
