//! Основные типы и структуры транзакций.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::{Currency, to_base_currency};

/// Тип операции в журнале.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// Поступление средств.
    #[serde(rename = "доход")]
    Income,
    /// Списание средств.
    #[serde(rename = "расход")]
    Expense,
}

impl OperationType {
    /// Все допустимые типы операций.
    pub const ALL: [Self; 2] = [Self::Income, Self::Expense];

    /// Возвращает метку типа в том виде, в каком она хранится в журнале.
    ///
    /// # Пример
    /// ```
    /// use ledger::transaction::OperationType;
    /// assert_eq!(OperationType::Income.as_str(), "доход");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "доход",
            Self::Expense => "расход",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Метка типа операции не распознана.
///
/// Хранит исходное значение без изменения регистра.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("неверный тип операции: {0}")]
pub struct InvalidOperationType(pub String);

impl FromStr for OperationType {
    type Err = InvalidOperationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == label)
            .ok_or_else(|| InvalidOperationType(s.to_string()))
    }
}

/// Запись журнала после успешной проверки строки.
///
/// Поля доступны только на чтение; сумма в рублях вычисляется
/// один раз в [`Transaction::new`].
///
/// # Пример
///
/// ```
/// use ledger::{currency::Currency, transaction::{OperationType, Transaction}};
///
/// let tx = Transaction::new(OperationType::Income, 1000.0, Currency::Usd, "зарплата", 1);
/// assert_eq!(tx.amount_in_base(), 90000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    op_type: OperationType,
    amount: f64,
    currency: Currency,
    description: String,
    line_number: usize,
    amount_in_base: f64,
}

impl Transaction {
    /// Создаёт транзакцию и пересчитывает сумму в базовую валюту.
    pub fn new(
        op_type: OperationType,
        amount: f64,
        currency: Currency,
        description: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            op_type,
            amount,
            currency,
            description: description.into(),
            line_number,
            amount_in_base: to_base_currency(amount, currency),
        }
    }

    /// Тип операции.
    #[must_use]
    pub fn op_type(&self) -> OperationType {
        self.op_type
    }

    /// Сумма в исходной валюте.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Валюта операции.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Описание в исходном регистре.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Ключ категории: описание в нижнем регистре.
    #[must_use]
    pub fn category(&self) -> String {
        self.description.to_lowercase()
    }

    /// Номер строки в исходном файле (с 1).
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Сумма в рублях.
    #[must_use]
    pub fn amount_in_base(&self) -> f64 {
        self.amount_in_base
    }
}
