//! Currency conversion into the base currency.

use chrono::NaiveDate;

use super::ExchangeRateTable;
use crate::domain::{Amount, Currency};

/// Error from currency conversion.
///
/// All variants are data-integrity faults: the dataset references a rate
/// it does not provide.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// No exchange rates at all for the date
    #[error("no exchange rates for {0}")]
    MissingDate(NaiveDate),

    /// The date has rates, but not for this currency
    #[error("no {currency} exchange rate for {date}")]
    MissingCurrency { currency: Currency, date: NaiveDate },

    /// Conversion was requested into something other than the base currency
    #[error("cannot convert {from} to {to}: only conversion into {base} is supported")]
    UnsupportedTarget {
        from: Currency,
        to: Currency,
        base: Currency,
    },
}

/// Converts amounts into a fixed base currency using an exchange-rate table.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::Currency;
/// use sailing_planner::exchange::{CurrencyConverter, ExchangeRateTable};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
/// let mut table = ExchangeRateTable::new();
/// table.insert(date, "usd", 1.25);
///
/// let converter = CurrencyConverter::new(&table, Currency::EUR);
/// let usd = Currency::parse("USD").unwrap();
///
/// assert_eq!(converter.to_base(100.0, usd, date).unwrap(), 125.0);
/// assert_eq!(converter.to_base(100.0, Currency::EUR, date).unwrap(), 100.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrencyConverter<'a> {
    table: &'a ExchangeRateTable,
    base: Currency,
}

impl<'a> CurrencyConverter<'a> {
    pub fn new(table: &'a ExchangeRateTable, base: Currency) -> Self {
        Self { table, base }
    }

    /// Returns the base currency.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Convert `amount` from `from` to `to` using the rate on `on`.
    ///
    /// Same-currency conversion returns `amount` unchanged without touching
    /// the table. Otherwise `to` must be the base currency.
    pub fn convert(
        &self,
        amount: Amount,
        from: Currency,
        on: NaiveDate,
        to: Currency,
    ) -> Result<Amount, ConversionError> {
        if from == to {
            return Ok(amount);
        }

        if to != self.base {
            return Err(ConversionError::UnsupportedTarget {
                from,
                to,
                base: self.base,
            });
        }

        let multiplier = self.table.multiplier(on, from)?;
        Ok(amount * multiplier)
    }

    /// Convert `amount` from `from` into the base currency.
    pub fn to_base(
        &self,
        amount: Amount,
        from: Currency,
        on: NaiveDate,
    ) -> Result<Amount, ConversionError> {
        self.convert(amount, from, on, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cur(s: &str) -> Currency {
        Currency::parse(s).unwrap()
    }

    fn table() -> ExchangeRateTable {
        let mut table = ExchangeRateTable::new();
        table.insert(date(2022, 1, 30), "usd", 1.1138);
        table.insert(date(2022, 1, 30), "jpy", 132.97);
        table
    }

    #[test]
    fn same_currency_is_identity() {
        let table = ExchangeRateTable::new();
        let converter = CurrencyConverter::new(&table, Currency::EUR);

        // No lookup happens, so an empty table is fine
        let amount = converter
            .convert(456.78, cur("USD"), date(2022, 1, 30), cur("usd"))
            .unwrap();
        assert_eq!(amount, 456.78);
    }

    #[test]
    fn multiplies_by_rate() {
        let table = table();
        let converter = CurrencyConverter::new(&table, Currency::EUR);

        let amount = converter
            .to_base(456.78, cur("USD"), date(2022, 1, 30))
            .unwrap();
        assert!((amount - 456.78 * 1.1138).abs() < 1e-9);
    }

    #[test]
    fn missing_date_is_error() {
        let table = table();
        let converter = CurrencyConverter::new(&table, Currency::EUR);

        let result = converter.to_base(1.0, cur("USD"), date(2022, 1, 31));
        assert_eq!(result, Err(ConversionError::MissingDate(date(2022, 1, 31))));
    }

    #[test]
    fn missing_currency_is_error() {
        let table = table();
        let converter = CurrencyConverter::new(&table, Currency::EUR);

        let result = converter.to_base(1.0, cur("GBP"), date(2022, 1, 30));
        assert!(matches!(
            result,
            Err(ConversionError::MissingCurrency { .. })
        ));
    }

    #[test]
    fn non_base_target_rejected() {
        let table = table();
        let converter = CurrencyConverter::new(&table, Currency::EUR);
        assert_eq!(converter.base(), Currency::EUR);

        let result = converter.convert(1.0, cur("USD"), date(2022, 1, 30), cur("JPY"));
        assert!(matches!(
            result,
            Err(ConversionError::UnsupportedTarget { .. })
        ));
    }

    #[test]
    fn error_display() {
        let err = ConversionError::MissingDate(date(2022, 1, 31));
        assert_eq!(err.to_string(), "no exchange rates for 2022-01-31");

        let err = ConversionError::MissingCurrency {
            currency: cur("GBP"),
            date: date(2022, 1, 30),
        };
        assert_eq!(err.to_string(), "no GBP exchange rate for 2022-01-30");
    }
}
