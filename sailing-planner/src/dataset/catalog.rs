//! Conversion from dataset DTOs to domain types.
//!
//! Joins every sailing to its rate record and validates the result into a
//! [`Leg`]. A sailing without a rate is a data-integrity fault and aborts
//! the whole build; nothing is silently skipped.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use super::types::{RawDataset, RawRate, RawSailing};
use crate::domain::{Currency, Leg, PortCode, SailingCode};
use crate::exchange::ExchangeRateTable;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error while building the leg catalog or the exchange-rate table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// A sailing has no rate record
    #[error("no rate record for sailing {0}")]
    MissingRate(String),

    /// A sailing or its rate record holds an unusable value
    #[error("invalid record for sailing {sailing_code}: {reason}")]
    InvalidRecord {
        sailing_code: String,
        reason: String,
    },

    /// An exchange-rate date key isn't `YYYY-MM-DD`
    #[error("invalid exchange-rate date: {0}")]
    InvalidExchangeDate(String),
}

impl CatalogError {
    /// Returns true for faults where the dataset is internally inconsistent,
    /// as opposed to malformed.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, CatalogError::MissingRate(_))
    }
}

/// Every sailing in the dataset as a priced, validated leg.
///
/// Legs keep the order of the `sailings` section. There is exactly one leg
/// per sailing record: no filtering, no deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegCatalog {
    legs: Vec<Leg>,
}

impl LegCatalog {
    /// Build the catalog by joining sailings to rates.
    ///
    /// If several rate records share a sailing code, the first one wins.
    pub fn build(dataset: &RawDataset) -> Result<Self, CatalogError> {
        let mut rates: HashMap<&str, &RawRate> = HashMap::with_capacity(dataset.rates.len());
        for rate in &dataset.rates {
            rates.entry(rate.sailing_code.as_str()).or_insert(rate);
        }

        let legs = dataset
            .sailings
            .iter()
            .map(|sailing| {
                let rate = rates
                    .get(sailing.sailing_code.as_str())
                    .ok_or_else(|| CatalogError::MissingRate(sailing.sailing_code.clone()))?;
                convert_sailing(sailing, rate)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(legs = legs.len(), "Built leg catalog");

        Ok(Self { legs })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Convert one sailing and its rate record into a leg.
fn convert_sailing(sailing: &RawSailing, rate: &RawRate) -> Result<Leg, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecord {
        sailing_code: sailing.sailing_code.clone(),
        reason,
    };

    let sailing_code =
        SailingCode::parse(&sailing.sailing_code).map_err(|e| invalid(e.to_string()))?;
    let origin = PortCode::parse(&sailing.origin_port)
        .map_err(|e| invalid(format!("origin port: {e}")))?;
    let destination = PortCode::parse(&sailing.destination_port)
        .map_err(|e| invalid(format!("destination port: {e}")))?;

    let departure = parse_date(&sailing.departure_date)
        .ok_or_else(|| invalid(format!("departure date {:?}", sailing.departure_date)))?;
    let arrival = parse_date(&sailing.arrival_date)
        .ok_or_else(|| invalid(format!("arrival date {:?}", sailing.arrival_date)))?;

    let amount = rate
        .rate
        .value()
        .ok_or_else(|| invalid(format!("rate {:?}", rate.rate)))?;
    let currency =
        Currency::parse(&rate.rate_currency).map_err(|e| invalid(e.to_string()))?;

    let leg = Leg::new(
        origin,
        destination,
        departure,
        arrival,
        sailing_code,
        amount,
        currency,
    )
    .map_err(|e| invalid(e.to_string()))?;

    Ok(match rate.rate.text() {
        Some(text) => leg.with_quoted_rate(text),
        None => leg,
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Build the exchange-rate table from the dataset's `exchange_rates` section.
pub fn build_exchange_rates(dataset: &RawDataset) -> Result<ExchangeRateTable, CatalogError> {
    let mut table = ExchangeRateTable::new();

    for (date, currencies) in &dataset.exchange_rates {
        let day =
            parse_date(date).ok_or_else(|| CatalogError::InvalidExchangeDate(date.clone()))?;
        for (currency, multiplier) in currencies {
            table.insert(day, currency, *multiplier);
        }
    }

    debug!(days = table.day_count(), "Built exchange-rate table");

    Ok(table)
}
