//! Planner configuration.

use crate::domain::Currency;

/// Configuration parameters for the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Currency all rates are converted into before comparison.
    pub base_currency: Currency,
}

impl PlannerConfig {
    pub fn new(base_currency: Currency) -> Self {
        Self { base_currency }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_currency: Currency::EUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.base_currency, Currency::EUR);
    }

    #[test]
    fn custom_config() {
        let usd = Currency::parse("USD").unwrap();
        let config = PlannerConfig::new(usd);
        assert_eq!(config.base_currency, usd);
    }
}
