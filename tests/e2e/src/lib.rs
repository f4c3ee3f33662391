//! # e2e-tests - End-to-end тесты CLI инструмента `ledger-report`
//!
//! ## Фикстуры
//!
//! Тестовые журналы расположены в `fixtures/`:
//! - `transactions.txt` — корректные строки вперемешку с ошибочными и пустыми
//! - `single_income.txt` — один доход в рублях
//! - `errors_only.txt` — только ошибочные строки
//! - `blank_only.txt` — только пустые строки

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Прочитать содержимое фикстуры.
pub fn read_fixture(name: &str) -> Result<String> {
    let path = fixture(name);
    fs::read_to_string(&path).with_context(|| format!("не удалось прочитать {}", path.display()))
}
