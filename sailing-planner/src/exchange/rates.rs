//! Exchange-rate table keyed by date and currency.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::ConversionError;
use crate::domain::Currency;

/// Daily multipliers into the base currency.
///
/// Currency keys are stored lowercase, so inserts and lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateTable {
    rates: HashMap<NaiveDate, HashMap<String, f64>>,
}

impl ExchangeRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the multiplier for `currency` on `date`, replacing any
    /// previous entry.
    pub fn insert(&mut self, date: NaiveDate, currency: &str, multiplier: f64) {
        self.rates
            .entry(date)
            .or_default()
            .insert(currency.to_ascii_lowercase(), multiplier);
    }

    /// Look up the multiplier for `currency` on `date`.
    pub fn multiplier(&self, date: NaiveDate, currency: Currency) -> Result<f64, ConversionError> {
        let day = self
            .rates
            .get(&date)
            .ok_or(ConversionError::MissingDate(date))?;

        day.get(&currency.lookup_key())
            .copied()
            .ok_or(ConversionError::MissingCurrency { currency, date })
    }

    /// Returns the number of days with at least one rate.
    pub fn day_count(&self) -> usize {
        self.rates.len()
    }
}
