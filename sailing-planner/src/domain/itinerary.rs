//! Itinerary types.
//!
//! An `Itinerary` represents a complete trip from origin to destination as
//! an ordered chain of one or more sailing legs.

use chrono::{Duration, NaiveDate};

use super::{Amount, DomainError, Leg, PortCode};
use crate::exchange::{ConversionError, CurrencyConverter};

/// A complete itinerary from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Constructs an itinerary from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Legs list is empty
    /// - Legs don't connect (destination != next origin)
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let prev_dest = window[0].destination();
            let next_origin = window[1].origin();
            if prev_dest != next_origin {
                return Err(DomainError::PortsNotConnected(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if this is a direct sailing (one leg).
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    // Indexing below is safe: validated non-empty at construction.

    pub fn origin(&self) -> &PortCode {
        self.legs[0].origin()
    }

    pub fn destination(&self) -> &PortCode {
        self.legs[self.legs.len() - 1].destination()
    }

    /// Returns the departure date of the first leg.
    pub fn departure_date(&self) -> NaiveDate {
        self.legs[0].departure_date()
    }

    /// Returns the arrival date of the last leg.
    pub fn arrival_date(&self) -> NaiveDate {
        self.legs[self.legs.len() - 1].arrival_date()
    }

    /// Returns the sum of each leg's own transit time.
    ///
    /// Time spent waiting in port between legs is not counted, so this is
    /// generally shorter than `arrival_date - departure_date`.
    pub fn total_duration(&self) -> Duration {
        self.legs.iter().map(Leg::duration).sum()
    }

    /// Returns the sum of all leg rates in the converter's base currency.
    pub fn total_rate(
        &self,
        converter: &CurrencyConverter<'_>,
    ) -> Result<Amount, ConversionError> {
        self.legs
            .iter()
            .map(|leg| leg.rate_in_base(converter))
            .sum()
    }

    /// Returns the sailing codes in travel order.
    pub fn sailing_codes(&self) -> Vec<&str> {
        self.legs.iter().map(|l| l.sailing_code().as_str()).collect()
    }
}
