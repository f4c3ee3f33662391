//! Ошибки обработки файла журнала целиком.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Ошибка, при которой отчёт не формируется.
///
/// Ошибки отдельных строк сюда не попадают: они собираются
/// в отчёт как [`ValidationError`](crate::transaction::ValidationError).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Файл не существует.
    #[error("Файл не найден: {}", .0.display())]
    NotFound(PathBuf),

    /// Файл существует, но открыть его не удалось.
    #[error("Ошибка при открытии файла: {source}")]
    Open {
        /// Путь к файлу.
        path: PathBuf,
        /// Исходная ошибка ввода/вывода.
        source: io::Error,
    },

    /// Ошибка чтения посреди файла, включая некорректный UTF-8.
    #[error("Ошибка при чтении файла (строка {line}): {source}")]
    Read {
        /// Номер строки (1-based), которую не удалось прочитать.
        line: usize,
        /// Исходная ошибка ввода/вывода.
        source: io::Error,
    },

    /// В файле нет ни одной непустой строки.
    #[error("Файл пуст или нет корректных строк")]
    Empty,
}

/// Удобный alias для Result с ProcessError.
pub type ProcessResult<T> = Result<T, ProcessError>;
