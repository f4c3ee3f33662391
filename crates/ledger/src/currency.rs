//! Поддерживаемые валюты и перевод сумм в базовую валюту (RUB).
//!
//! Курсы фиксированы и не загружаются извне: [`RATES`] задаёт количество
//! рублей за одну единицу каждой валюты.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Код базовой валюты, в которую переводятся все суммы.
pub const BASE_CURRENCY: &str = "RUB";

/// Фиксированные курсы: рублей за единицу валюты.
pub const RATES: [(Currency, f64); 3] =
    [(Currency::Usd, 90.0), (Currency::Eur, 100.0), (Currency::Rub, 1.0)];

/// Валюта транзакции.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Доллар США.
    Usd,
    /// Евро.
    Eur,
    /// Российский рубль (базовая валюта).
    Rub,
}

impl Currency {
    /// Возвращает код валюты в верхнем регистре.
    ///
    /// ```
    /// use ledger::currency::Currency;
    /// assert_eq!(Currency::Eur.code(), "EUR");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Rub => "RUB",
        }
    }

    /// Курс валюты: сколько рублей стоит одна единица.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        match self {
            Self::Usd => RATES[0].1,
            Self::Eur => RATES[1].1,
            Self::Rub => RATES[2].1,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Код валюты не входит в список поддерживаемых.
///
/// Содержит код, уже приведённый к верхнему регистру.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("неподдерживаемая валюта: {0}")]
pub struct UnsupportedCurrency(pub String);

impl FromStr for Currency {
    type Err = UnsupportedCurrency;

    /// Разбирает код валюты без учёта регистра.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_uppercase();
        RATES
            .iter()
            .map(|(currency, _)| *currency)
            .find(|currency| currency.code() == code)
            .ok_or(UnsupportedCurrency(code))
    }
}

/// Переводит сумму в базовую валюту без округления.
///
/// ```
/// use ledger::currency::{Currency, to_base_currency};
/// assert_eq!(to_base_currency(1000.0, Currency::Usd), 90000.0);
/// ```
#[must_use]
pub fn to_base_currency(amount: f64, currency: Currency) -> f64 {
    amount * currency.rate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_match_table() {
        for (currency, rate) in RATES {
            assert_eq!(currency.rate(), rate);
        }
        assert_eq!(Currency::Rub.code(), BASE_CURRENCY);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!("Eur".parse::<Currency>(), Ok(Currency::Eur));
        assert_eq!("RUB".parse::<Currency>(), Ok(Currency::Rub));
    }

    #[test]
    fn unknown_code_is_reported_uppercased() {
        assert_eq!("xyz".parse::<Currency>(), Err(UnsupportedCurrency("XYZ".to_string())));
        assert_eq!("".parse::<Currency>(), Err(UnsupportedCurrency(String::new())));
    }

    #[test]
    fn conversion_uses_fixed_rates() {
        assert_eq!(to_base_currency(1000.0, Currency::Usd), 90000.0);
        assert!((to_base_currency(500.50, Currency::Eur) - 50050.0).abs() < 1e-9);
        assert_eq!(to_base_currency(42.0, Currency::Rub), 42.0);
    }

    #[test]
    fn conversion_is_linear() {
        let pairs = [(1.25, 3.5), (100.0, 0.01), (999.99, 0.01)];
        for currency in [Currency::Usd, Currency::Eur, Currency::Rub] {
            for (a, b) in pairs {
                let whole = to_base_currency(a + b, currency);
                let parts = to_base_currency(a, currency) + to_base_currency(b, currency);
                assert!((whole - parts).abs() < 1e-9, "{currency}: {whole} != {parts}");
            }
        }
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }
}
