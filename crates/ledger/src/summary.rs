//! Агрегация транзакций: итоги, баланс, крупнейшая операция и категории.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::transaction::{OperationType, Transaction};

/// Накопленные суммы по одной категории (в рублях).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryStats {
    /// Сумма доходов.
    pub income: f64,
    /// Сумма расходов.
    pub expense: f64,
    /// Количество операций.
    pub count: usize,
}

impl CategoryStats {
    /// Учитывает транзакцию в категории.
    pub fn record(&mut self, tx: &Transaction) {
        match tx.op_type() {
            OperationType::Income => self.income += tx.amount_in_base(),
            OperationType::Expense => self.expense += tx.amount_in_base(),
        }
        self.count += 1;
    }
}

/// Сводка по всем принятым транзакциям.
///
/// Строится за один проход и после этого не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    /// Доходы минус расходы.
    pub balance: f64,
    /// Транзакция с наибольшей суммой в рублях. При равенстве — первая по файлу.
    pub biggest: Option<Transaction>,
    /// Категории в лексикографическом порядке ключа.
    pub categories: BTreeMap<String, CategoryStats>,
}

impl Summary {
    /// Агрегирует транзакции в порядке их следования в файле.
    ///
    /// # Пример
    ///
    /// ```
    /// use ledger::{summary::Summary, transaction::parse_line};
    ///
    /// let txs = vec![
    ///     parse_line("доход;1000;RUB;Зарплата", 1).unwrap(),
    ///     parse_line("расход;10;USD;еда", 2).unwrap(),
    /// ];
    /// let summary = Summary::from_transactions(&txs);
    ///
    /// assert_eq!(summary.total_income, 1000.0);
    /// assert_eq!(summary.total_expense, 900.0);
    /// assert_eq!(summary.balance, 100.0);
    /// assert_eq!(summary.categories["зарплата"].count, 1);
    /// ```
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        let mut biggest: Option<&Transaction> = None;
        let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();

        for tx in transactions {
            match tx.op_type() {
                OperationType::Income => total_income += tx.amount_in_base(),
                OperationType::Expense => total_expense += tx.amount_in_base(),
            }

            // Строгое сравнение: при равенстве остаётся первая
            if biggest.is_none_or(|b| tx.amount_in_base() > b.amount_in_base()) {
                biggest = Some(tx);
            }

            categories.entry(tx.category()).or_default().record(tx);
        }

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            biggest: biggest.cloned(),
            categories,
        }
    }
}
