//! Exchange rates and currency conversion.
//!
//! Rates are supplied per day by the dataset. Each entry is the multiplier
//! that turns an amount in the given currency into the base currency.
//! Only that forward direction is supported.

mod convert;
mod rates;

pub use convert::{ConversionError, CurrencyConverter};
pub use rates::ExchangeRateTable;
