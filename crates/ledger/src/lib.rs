//! Библиотека анализа журнала операций.
//!
//! Журнал — текстовый файл, где каждая строка описывает одну операцию
//! в формате `тип;сумма;валюта;описание`, например:
//!
//! ```text
//! доход;1000;USD;зарплата
//! расход;500,50;EUR;еда
//! ```
//!
//! Крейт разбирает строки, переводит суммы в рубли по фиксированным курсам
//! и строит отчёт: итоги, баланс, крупнейшая операция, статистика по
//! категориям и список ошибок разбора.
//!
//! # Быстрый старт
//!
//! ```
//! use std::io::Cursor;
//!
//! use ledger::prelude::*;
//!
//! let report = process_reader(Cursor::new("доход;1000;USD;зарплата\n")).unwrap();
//! assert_eq!(report.summary.total_income, 90000.0);
//! assert!(report.to_string().starts_with("Транзакций обработано: 1"));
//! ```

pub mod currency;
pub mod error;
pub mod processor;
pub mod reader;
pub mod report;
pub mod summary;
pub mod transaction;

/// Часто используемые типы и функции.
pub mod prelude {
    pub use crate::{
        currency::{Currency, to_base_currency},
        error::{ProcessError, ProcessResult},
        processor::{DEFAULT_INPUT, process_file, process_reader},
        reader::LedgerReader,
        report::Report,
        summary::{CategoryStats, Summary},
        transaction::{OperationType, Transaction, ValidationError, parse_line},
    };
}
