//! Port and sailing code types.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid port or sailing code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid code {input:?}: {reason}")]
pub struct InvalidCode {
    input: String,
    reason: &'static str,
}

/// Validates an opaque code: non-empty, no surrounding or embedded whitespace.
fn validate_code(s: &str) -> Result<(), InvalidCode> {
    if s.is_empty() {
        return Err(InvalidCode {
            input: s.to_string(),
            reason: "must not be empty",
        });
    }

    if s.chars().any(char::is_whitespace) {
        return Err(InvalidCode {
            input: s.to_string(),
            reason: "must not contain whitespace",
        });
    }

    Ok(())
}

/// A port code such as `CNSHA` or `NLRTM`.
///
/// Port codes are opaque: the planner only ever compares them for equality.
/// The backing string is shared, so cloning a `PortCode` is cheap.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::PortCode;
///
/// let shanghai = PortCode::parse("CNSHA").unwrap();
/// assert_eq!(shanghai.as_str(), "CNSHA");
///
/// assert!(PortCode::parse("").is_err());
/// assert!(PortCode::parse("CN SHA").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortCode(Arc<str>);

impl PortCode {
    /// Parse a port code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        validate_code(s)?;
        Ok(PortCode(Arc::from(s)))
    }

    /// Returns the port code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortCode({})", self.as_str())
    }
}

impl fmt::Display for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a single sailing, joining a leg to its rate record.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SailingCode(Arc<str>);

impl SailingCode {
    /// Parse a sailing code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        validate_code(s)?;
        Ok(SailingCode(Arc::from(s)))
    }

    /// Returns the sailing code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SailingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SailingCode({})", self.as_str())
    }
}

impl fmt::Display for SailingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ports() {
        assert!(PortCode::parse("CNSHA").is_ok());
        assert!(PortCode::parse("NLRTM").is_ok());
        assert!(PortCode::parse("ESBCN").is_ok());
        assert!(PortCode::parse("X").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(PortCode::parse("").is_err());
        assert!(SailingCode::parse("").is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(PortCode::parse(" CNSHA").is_err());
        assert!(PortCode::parse("CNSHA\n").is_err());
        assert!(SailingCode::parse("AB CD").is_err());
    }

    #[test]
    fn error_display() {
        let err = PortCode::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid code \"\": must not be empty");
    }

    #[test]
    fn display_and_debug() {
        let port = PortCode::parse("NLRTM").unwrap();
        assert_eq!(format!("{}", port), "NLRTM");
        assert_eq!(format!("{:?}", port), "PortCode(NLRTM)");

        let code = SailingCode::parse("MNOP").unwrap();
        assert_eq!(format!("{}", code), "MNOP");
        assert_eq!(format!("{:?}", code), "SailingCode(MNOP)");
    }

    #[test]
    fn ports_are_case_sensitive() {
        let upper = PortCode::parse("CNSHA").unwrap();
        let lower = PortCode::parse("cnsha").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PortCode::parse("CNSHA").unwrap());
        assert!(set.contains(&PortCode::parse("CNSHA").unwrap()));
        assert!(!set.contains(&PortCode::parse("NLRTM").unwrap()));
    }
}
