//! Итоговый отчёт по журналу.
//!
//! [`Report`] отображается в текст через [`Display`](fmt::Display)
//! и сериализуется в JSON через serde.

use std::fmt;

use serde::Serialize;

use crate::{
    currency::BASE_CURRENCY,
    summary::Summary,
    transaction::{Transaction, ValidationError},
};

/// Отчёт по одному прогону: сводка и ошибки разбора.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Количество принятых транзакций.
    pub transactions: usize,
    #[serde(flatten)]
    pub summary: Summary,
    /// Ошибки разбора в порядке следования строк.
    pub errors: Vec<ValidationError>,
}

impl Report {
    /// Собирает отчёт из принятых транзакций и ошибок разбора.
    #[must_use]
    pub fn new(transactions: &[Transaction], errors: Vec<ValidationError>) -> Self {
        Self {
            transactions: transactions.len(),
            summary: Summary::from_transactions(transactions),
            errors,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Summary { total_income, total_expense, balance, biggest, categories } = &self.summary;

        writeln!(f, "Транзакций обработано: {}", self.transactions)?;
        writeln!(f, "Ошибок при разборе: {}", self.errors.len())?;
        writeln!(f, "Итого доход ({BASE_CURRENCY}) = {total_income:.2}")?;
        writeln!(f, "Итого расход ({BASE_CURRENCY}) = {total_expense:.2}")?;
        writeln!(f, "Баланс ({BASE_CURRENCY}) = {balance:.2}")?;
        if let Some(tx) = biggest {
            writeln!(
                f,
                "Самая крупная транзакция: строка {}, {}, {:?} {} = {:.2} {BASE_CURRENCY}, описание: {}",
                tx.line_number(),
                tx.op_type(),
                tx.amount(),
                tx.currency(),
                tx.amount_in_base(),
                tx.description(),
            )?;
        }
        write!(f, "Статистика по категориям:")?;
        for (category, stats) in categories {
            write!(
                f,
                "\n  {category} — операций {}, доход {:.2}, расход {:.2} ({BASE_CURRENCY})",
                stats.count, stats.income, stats.expense,
            )?;
        }
        if !self.errors.is_empty() {
            write!(f, "\nОшибки (подробно):")?;
            for error in &self.errors {
                write!(f, "\n  {error}")?;
            }
        }
        Ok(())
    }
}
