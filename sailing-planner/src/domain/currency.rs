//! Currency code type.

use std::fmt;

/// Error returned when parsing an invalid currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code: {reason}")]
pub struct InvalidCurrency {
    reason: &'static str,
}

/// A 3-letter currency code (ISO 4217 style).
///
/// Codes are normalised to uppercase at parse time, so `usd` and `USD`
/// compare equal. Exchange-rate tables key currencies by the lowercase
/// form, available via [`Currency::lookup_key`].
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::Currency;
///
/// let usd = Currency::parse("usd").unwrap();
/// assert_eq!(usd.as_str(), "USD");
/// assert_eq!(usd, Currency::parse("USD").unwrap());
/// assert_eq!(usd.lookup_key(), "usd");
///
/// assert!(Currency::parse("US").is_err());
/// assert!(Currency::parse("U$D").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    /// Euro; the default base currency.
    pub const EUR: Currency = Currency(*b"EUR");

    /// Parse a currency code, accepting either case.
    pub fn parse(s: &str) -> Result<Self, InvalidCurrency> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCurrency {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidCurrency {
                reason: "must be ASCII letters",
            });
        }

        Ok(Currency([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the uppercase currency code.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the lowercase key used by exchange-rate tables.
    pub fn lookup_key(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
