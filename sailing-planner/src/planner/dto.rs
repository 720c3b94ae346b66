//! Output records for found itineraries.
//!
//! A found itinerary is reported as an array of leg records in the same
//! shape as the input dataset: sailing fields joined with the rate fields.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One leg of a found itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRecord {
    pub origin_port: String,
    pub destination_port: String,

    /// `YYYY-MM-DD`
    pub departure_date: String,

    /// `YYYY-MM-DD`
    pub arrival_date: String,

    pub sailing_code: String,

    /// Rate in the leg's own currency, as quoted by the dataset
    pub rate: String,

    pub rate_currency: String,
}

impl LegRecord {
    /// Convert a domain leg to its output record.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            origin_port: leg.origin().to_string(),
            destination_port: leg.destination().to_string(),
            departure_date: leg.departure_date().format(DATE_FORMAT).to_string(),
            arrival_date: leg.arrival_date().format(DATE_FORMAT).to_string(),
            sailing_code: leg.sailing_code().to_string(),
            rate: leg.quoted_rate().into_owned(),
            rate_currency: leg.currency().to_string(),
        }
    }
}

impl From<&Leg> for LegRecord {
    fn from(leg: &Leg) -> Self {
        Self::from_leg(leg)
    }
}

/// Convert an itinerary to leg records in travel order.
pub fn itinerary_records(itinerary: &Itinerary) -> Vec<LegRecord> {
    itinerary.legs().iter().map(LegRecord::from_leg).collect()
}
