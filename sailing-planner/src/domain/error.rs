//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from dataset and IO errors.

use super::PortCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., arrival before departure)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Rate is negative, NaN or infinite
    #[error("invalid rate: {0}")]
    InvalidRate(f64),

    /// Consecutive legs don't share a port
    #[error("ports {0} and {1} are not connected")]
    PortsNotConnected(PortCode, PortCode),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,
}
