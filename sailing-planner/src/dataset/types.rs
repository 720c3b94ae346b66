//! Dataset DTOs.
//!
//! These types map directly to the JSON dataset. Fields are kept as strings
//! here; validation happens when building the [`LegCatalog`](super::LegCatalog).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DatasetError;

/// The complete dataset document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawDataset {
    /// Scheduled sailings, in catalog order.
    pub sailings: Vec<RawSailing>,

    /// Price records, joined to sailings by `sailing_code`.
    pub rates: Vec<RawRate>,

    /// Date (`YYYY-MM-DD`) to lowercase currency code to multiplier.
    #[serde(default)]
    pub exchange_rates: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RawDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A scheduled sailing without its price.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawSailing {
    pub origin_port: String,
    pub destination_port: String,
    /// `YYYY-MM-DD`
    pub departure_date: String,
    /// `YYYY-MM-DD`
    pub arrival_date: String,
    pub sailing_code: String,
}

/// Price of one sailing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawRate {
    pub sailing_code: String,
    pub rate: RawAmount,
    pub rate_currency: String,
}

/// A rate as it appears in the JSON: usually a decimal string like
/// `"589.30"`, occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl RawAmount {
    /// Returns the numeric value, or `None` if the text isn't a number.
    pub fn value(&self) -> Option<f64> {
        match self {
            RawAmount::Text(s) => s.trim().parse().ok(),
            RawAmount::Number(n) => Some(*n),
        }
    }

    /// Returns the rate text when the JSON carried a string.
    pub fn text(&self) -> Option<&str> {
        match self {
            RawAmount::Text(s) => Some(s.trim()),
            RawAmount::Number(_) => None,
        }
    }
}
