use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("regional code '{0}' must be exactly two uppercase letters A-Z")]
pub struct InvalidRegionalCode(pub String);

/// Two-letter tag for the issuing region or dealer, e.g. `YC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionalCode([u8; 2]);

impl RegionalCode {
    /// Validates `code` against `[A-Z]{2}`. No trimming or case folding.
    pub fn parse(code: &str) -> Result<Self, InvalidRegionalCode> {
        match code.as_bytes() {
            &[a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(Self([a, b])),
            _ => Err(InvalidRegionalCode(code.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for RegionalCode {
    type Err = InvalidRegionalCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RegionalCode {
    type Error = InvalidRegionalCode;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for RegionalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
