//! Sailing leg type.
//!
//! A `Leg` is one scheduled direct sailing between two ports, together with
//! its resolved price. Legs are immutable once built.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use super::{Currency, DomainError, PortCode, SailingCode};
use crate::exchange::{ConversionError, CurrencyConverter};

/// Monetary amount. Always finite and non-negative for leg rates.
pub type Amount = f64;

/// A leg of an itinerary (one sailing).
///
/// # Invariants
///
/// - `arrival >= departure`
/// - `rate` is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    origin: PortCode,
    destination: PortCode,
    departure: NaiveDate,
    arrival: NaiveDate,
    sailing_code: SailingCode,
    rate: Amount,
    currency: Currency,
    /// Rate text exactly as the dataset wrote it
    quoted_rate: Option<Arc<str>>,
}

impl Leg {
    /// Construct a leg, validating dates and rate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `arrival < departure`
    /// - `rate` is negative, NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// use sailing_planner::domain::{Currency, Leg, PortCode, SailingCode};
    /// use chrono::NaiveDate;
    ///
    /// let leg = Leg::new(
    ///     PortCode::parse("CNSHA").unwrap(),
    ///     PortCode::parse("NLRTM").unwrap(),
    ///     NaiveDate::from_ymd_opt(2022, 1, 30).unwrap(),
    ///     NaiveDate::from_ymd_opt(2022, 3, 5).unwrap(),
    ///     SailingCode::parse("MNOP").unwrap(),
    ///     456.78,
    ///     Currency::parse("USD").unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(leg.duration().num_days(), 34);
    /// ```
    pub fn new(
        origin: PortCode,
        destination: PortCode,
        departure: NaiveDate,
        arrival: NaiveDate,
        sailing_code: SailingCode,
        rate: Amount,
        currency: Currency,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::InvalidLeg(
                "arrival date must not precede departure date",
            ));
        }

        if !rate.is_finite() || rate < 0.0 {
            return Err(DomainError::InvalidRate(rate));
        }

        Ok(Leg {
            origin,
            destination,
            departure,
            arrival,
            sailing_code,
            rate,
            currency,
            quoted_rate: None,
        })
    }

    /// Attach the rate text as it was written in the source data.
    pub fn with_quoted_rate(mut self, text: impl Into<Arc<str>>) -> Self {
        self.quoted_rate = Some(text.into());
        self
    }

    /// Returns the port this sailing leaves from.
    pub fn origin(&self) -> &PortCode {
        &self.origin
    }

    /// Returns the port this sailing arrives at.
    pub fn destination(&self) -> &PortCode {
        &self.destination
    }

    pub fn departure_date(&self) -> NaiveDate {
        self.departure
    }

    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival
    }

    pub fn sailing_code(&self) -> &SailingCode {
        &self.sailing_code
    }

    /// Returns the rate in its own currency.
    pub fn rate(&self) -> Amount {
        self.rate
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the rate as quoted by the source, or the shortest decimal
    /// form of the amount when no quote was attached.
    pub fn quoted_rate(&self) -> Cow<'_, str> {
        match &self.quoted_rate {
            Some(text) => Cow::Borrowed(text.as_ref()),
            None => Cow::Owned(self.rate.to_string()),
        }
    }

    /// Returns the transit time in whole days.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns the rate converted to the converter's base currency,
    /// using the exchange rate on the departure date.
    pub fn rate_in_base(
        &self,
        converter: &CurrencyConverter<'_>,
    ) -> Result<Amount, ConversionError> {
        converter.to_base(self.rate, self.currency, self.departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::ExchangeRateTable;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn port(s: &str) -> PortCode {
        PortCode::parse(s).unwrap()
    }

    fn make_leg(
        departure: NaiveDate,
        arrival: NaiveDate,
        rate: f64,
        currency: &str,
    ) -> Result<Leg, DomainError> {
        Leg::new(
            port("CNSHA"),
            port("ESBCN"),
            departure,
            arrival,
            SailingCode::parse("ERXQ").unwrap(),
            rate,
            Currency::parse(currency).unwrap(),
        )
    }

    #[test]
    fn leg_construction_valid() {
        let leg = make_leg(date(2022, 1, 29), date(2022, 2, 6), 261.96, "EUR").unwrap();

        assert_eq!(leg.origin(), &port("CNSHA"));
        assert_eq!(leg.destination(), &port("ESBCN"));
        assert_eq!(leg.sailing_code().as_str(), "ERXQ");
        assert_eq!(leg.rate(), 261.96);
        assert_eq!(leg.currency(), Currency::EUR);
    }

    #[test]
    fn leg_duration() {
        let leg = make_leg(date(2022, 1, 29), date(2022, 2, 6), 1.0, "EUR").unwrap();
        assert_eq!(leg.duration(), Duration::days(8));
    }

    #[test]
    fn same_day_arrival_allowed() {
        let leg = make_leg(date(2022, 1, 29), date(2022, 1, 29), 1.0, "EUR").unwrap();
        assert_eq!(leg.duration(), Duration::zero());
    }

    #[test]
    fn arrival_before_departure_rejected() {
        let result = make_leg(date(2022, 2, 6), date(2022, 1, 29), 1.0, "EUR");
        assert!(matches!(result, Err(DomainError::InvalidLeg(_))));
    }

    #[test]
    fn negative_rate_rejected() {
        let result = make_leg(date(2022, 1, 29), date(2022, 2, 6), -0.01, "EUR");
        assert!(matches!(result, Err(DomainError::InvalidRate(_))));
    }

    #[test]
    fn non_finite_rate_rejected() {
        assert!(make_leg(date(2022, 1, 29), date(2022, 2, 6), f64::NAN, "EUR").is_err());
        assert!(make_leg(date(2022, 1, 29), date(2022, 2, 6), f64::INFINITY, "EUR").is_err());
    }

    #[test]
    fn rate_in_base_uses_departure_date() {
        let mut table = ExchangeRateTable::new();
        table.insert(date(2022, 1, 29), "usd", 2.0);
        table.insert(date(2022, 2, 6), "usd", 3.0);
        let converter = CurrencyConverter::new(&table, Currency::EUR);

        let leg = make_leg(date(2022, 1, 29), date(2022, 2, 6), 10.0, "USD").unwrap();
        assert_eq!(leg.rate_in_base(&converter).unwrap(), 20.0);
    }

    #[test]
    fn quoted_rate_keeps_source_text() {
        let leg = make_leg(date(2022, 1, 29), date(2022, 2, 6), 100.0, "EUR").unwrap();
        assert_eq!(leg.quoted_rate(), "100");

        let leg = leg.with_quoted_rate("100.00");
        assert_eq!(leg.quoted_rate(), "100.00");
        assert_eq!(leg.rate(), 100.0);
    }
}
