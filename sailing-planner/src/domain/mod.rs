//! Domain types for the sailing planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod currency;
mod error;
mod itinerary;
mod leg;
mod port;

pub use currency::{Currency, InvalidCurrency};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::{Amount, Leg};
pub use port::{InvalidCode, PortCode, SailingCode};
