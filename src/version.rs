use std::fmt;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Which component of a version to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of exactly the form `X.Y.Z`.
    ///
    /// This is a strict validator: no `v` prefix, no whitespace, no missing
    /// or extra components. Each component must be a run of ASCII digits.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::invalid_version(format!(
                "'{}' - expected X.Y.Z",
                text
            )));
        }

        let component = |name: &str, raw: &str| -> Result<u32> {
            // u32::from_str would accept a leading '+', so gate on digits first
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ReleaseError::invalid_version(format!(
                    "{} component '{}' is not a non-negative integer",
                    name, raw
                )));
            }
            raw.parse::<u32>().map_err(|_| {
                ReleaseError::invalid_version(format!("{} component '{}' is out of range", name, raw))
            })
        };

        Ok(Version {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
        })
    }

    /// Bump the given component, resetting all lower-order components to zero.
    pub fn bump(&self, part: Part) -> Self {
        match part {
            Part::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            Part::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            Part::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Part {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Part::Major),
            "minor" => Ok(Part::Minor),
            "patch" => Ok(Part::Patch),
            other => Err(ReleaseError::InvalidPart(other.to_string())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Major => write!(f, "major"),
            Part::Minor => write!(f, "minor"),
            Part::Patch => write!(f, "patch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_zeros() {
        assert_eq!(Version::parse("0.0.0").unwrap(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_version_parse_rejects_wrong_arity() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_rejects_non_digits() {
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse(" 1.2.3").is_err());
        assert!(Version::parse("1.2.3 ").is_err());
        assert!(Version::parse("1.+2.3").is_err());
        assert!(Version::parse("1..3").is_err());
        assert!(Version::parse("-1.2.3").is_err());
    }

    #[test]
    fn test_version_bump_major_resets_lower() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Part::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor_resets_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Part::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Part::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_carries_past_nine() {
        assert_eq!(
            Version::new(1, 9, 9).bump(Part::Minor),
            Version::new(1, 10, 0)
        );
    }

    #[test]
    fn test_version_bump_from_initial() {
        assert_eq!(
            Version::new(0, 0, 1).bump(Part::Major),
            Version::new(1, 0, 0)
        );
    }

    #[test]
    fn test_version_roundtrip() {
        for v in [
            Version::new(0, 0, 0),
            Version::new(1, 2, 3),
            Version::new(10, 0, 42),
            Version::new(1, 10, 0),
        ] {
            assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_part_from_str() {
        assert_eq!("major".parse::<Part>().unwrap(), Part::Major);
        assert_eq!("minor".parse::<Part>().unwrap(), Part::Minor);
        assert_eq!("patch".parse::<Part>().unwrap(), Part::Patch);
    }

    #[test]
    fn test_part_from_str_invalid() {
        for bad in ["release", "Major", "MAJOR", "", "patch "] {
            let err = bad.parse::<Part>().unwrap_err();
            assert!(matches!(err, ReleaseError::InvalidPart(_)));
        }
    }

    #[test]
    fn test_part_display() {
        assert_eq!(Part::Major.to_string(), "major");
        assert_eq!(Part::Minor.to_string(), "minor");
        assert_eq!(Part::Patch.to_string(), "patch");
    }
}
