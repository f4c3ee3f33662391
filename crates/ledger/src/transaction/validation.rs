//! Разбор и проверка одной строки журнала.

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{OperationType, Transaction};
use crate::currency::{Currency, UnsupportedCurrency};

/// Число полей в строке журнала: тип, сумма, валюта, описание.
pub const FIELD_COUNT: usize = 4;

/// Разделитель полей.
pub const FIELD_SEPARATOR: char = ';';

/// Ошибки проверки строки журнала.
///
/// Текст ошибки попадает в отчёт как есть: номер строки и,
/// где применимо, исходное значение поля.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Строка {line} — неверный формат (ожид. {expected} поля), получено {actual}")]
    FieldCount { line: usize, expected: usize, actual: usize },
    #[error("Строка {line} — пустой тип операции")]
    EmptyType { line: usize },
    #[error("Строка {line} — неверный тип операции: {value}")]
    InvalidType { line: usize, value: String },
    #[error("Строка {line} — пустая сумма")]
    EmptyAmount { line: usize },
    #[error("Строка {line} — ошибка преобразования суммы: {raw}")]
    AmountConversion { line: usize, raw: String },
    #[error("Строка {line} — отрицательная или нулевая сумма: {amount:?}")]
    NonPositiveAmount { line: usize, amount: f64 },
    #[error("Строка {line} — пустая валюта")]
    EmptyCurrency { line: usize },
    #[error("Строка {line} — неподдерживаемая валюта: {code}")]
    UnsupportedCurrency { line: usize, code: String },
    #[error("Строка {line} — пустое описание")]
    EmptyDescription { line: usize },
}

impl ValidationError {
    /// Номер строки, в которой произошла ошибка.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::FieldCount { line, .. }
            | Self::EmptyType { line }
            | Self::InvalidType { line, .. }
            | Self::EmptyAmount { line }
            | Self::AmountConversion { line, .. }
            | Self::NonPositiveAmount { line, .. }
            | Self::EmptyCurrency { line }
            | Self::UnsupportedCurrency { line, .. }
            | Self::EmptyDescription { line } => *line,
        }
    }
}

// В отчёте ошибки представлены своим текстом.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Разбирает строку журнала `тип;сумма;валюта;описание`.
///
/// Поля проверяются по порядку, возвращается первая найденная ошибка.
/// Сумма допускает запятую в качестве десятичного разделителя.
///
/// # Пример
///
/// ```
/// use ledger::{currency::Currency, transaction::{OperationType, parse_line}};
///
/// let tx = parse_line("расход;500,50;eur;Еда", 2).unwrap();
/// assert_eq!(tx.op_type(), OperationType::Expense);
/// assert_eq!(tx.amount(), 500.5);
/// assert_eq!(tx.currency(), Currency::Eur);
/// assert_eq!(tx.description(), "Еда");
///
/// let err = parse_line("доход;100;XYZ;тест", 5).unwrap_err();
/// assert_eq!(err.to_string(), "Строка 5 — неподдерживаемая валюта: XYZ");
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<Transaction, ValidationError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
    let &[op_type, amount, currency, description] = fields.as_slice() else {
        return Err(ValidationError::FieldCount {
            line: line_number,
            expected: FIELD_COUNT,
            actual: fields.len(),
        });
    };

    if op_type.is_empty() {
        return Err(ValidationError::EmptyType { line: line_number });
    }
    let op_type: OperationType = op_type.parse().map_err(|_| ValidationError::InvalidType {
        line: line_number,
        value: op_type.to_string(),
    })?;

    let amount = parse_amount(amount, line_number)?;

    if currency.is_empty() {
        return Err(ValidationError::EmptyCurrency { line: line_number });
    }
    let currency: Currency = currency.parse().map_err(|UnsupportedCurrency(code)| {
        ValidationError::UnsupportedCurrency { line: line_number, code }
    })?;

    if description.is_empty() {
        return Err(ValidationError::EmptyDescription { line: line_number });
    }

    Ok(Transaction::new(op_type, amount, currency, description, line_number))
}

/// Разбирает сумму: запятая заменяется точкой, значение должно быть
/// конечным и строго положительным.
fn parse_amount(raw: &str, line_number: usize) -> Result<f64, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyAmount { line: line_number });
    }

    let amount: f64 = raw
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| ValidationError::AmountConversion {
            line: line_number,
            raw: raw.to_string(),
        })?;

    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount { line: line_number, amount });
    }

    Ok(amount)
}
