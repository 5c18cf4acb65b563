use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A semantic version: exactly three dot-separated unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Increment the patch component.
    pub fn bump_patch(self) -> Self {
        Self {
            patch: self.patch + 1,
            ..self
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = || {
            parts
                .next()
                .and_then(|p| p.parse::<u64>().ok())
                .ok_or_else(|| Error::InvalidVersion(s.to_string()))
        };
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(Error::InvalidVersion(s.to_string()));
        }
        Ok(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_three_components() {
        let v: Version = "1.2.30".parse().expect("should parse");
        assert_eq!(v, Version::new(1, 2, 30));
    }

    #[test]
    fn test_rejects_malformed_strings() {
        for s in ["", "1", "1.2", "1.2.3.4", "1.2.x", "a.b.c", "1..3", "-1.2.3"] {
            assert!(s.parse::<Version>().is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn test_bump_patch() {
        let v = Version::new(0, 4, 9).bump_patch();
        assert_eq!(v.to_string(), "0.4.10");
    }

    #[test]
    fn test_display_roundtrip() {
        let v: Version = "10.0.7".parse().expect("should parse");
        assert_eq!(v.to_string(), "10.0.7");
    }
}
