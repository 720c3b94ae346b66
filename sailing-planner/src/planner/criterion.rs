//! Optimisation criterion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Leg;
use crate::exchange::{ConversionError, CurrencyConverter};

/// What "best" means for a search. Exactly one criterion applies per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Lowest total rate in the base currency.
    Cheapest,
    /// Lowest total time at sea (sum of leg durations).
    Fastest,
}

/// Error returned when parsing an unknown criterion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion {0:?}: expected \"cheapest\" or \"fastest\"")]
pub struct InvalidCriterion(String);

impl Criterion {
    /// Returns the weight of a single leg under this criterion.
    ///
    /// Cheapest weighs by base-currency rate; fastest by whole days at sea.
    /// Only the cheapest criterion consults the exchange-rate table.
    pub fn weight(
        &self,
        leg: &Leg,
        converter: &CurrencyConverter<'_>,
    ) -> Result<f64, ConversionError> {
        match self {
            Criterion::Cheapest => leg.rate_in_base(converter),
            Criterion::Fastest => Ok(leg.duration().num_days() as f64),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Cheapest => "cheapest",
            Criterion::Fastest => "fastest",
        }
    }
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cheapest" => Ok(Criterion::Cheapest),
            "fastest" => Ok(Criterion::Fastest),
            _ => Err(InvalidCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
