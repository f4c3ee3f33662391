//! Модель данных журнала операций.
//!
//! Этот модуль определяет [`Transaction`], типы операций и разбор строки
//! журнала в транзакцию через [`parse_line`].

mod types;
mod validation;

pub use types::{InvalidOperationType, OperationType, Transaction};
pub use validation::{FIELD_COUNT, FIELD_SEPARATOR, ValidationError, parse_line};
