//! Dotted component versions
//!
//! Native codec components report their version and specification version as
//! dotted decimal strings ("1.0.0.0"). This module provides the structured
//! value those strings parse into.

use std::fmt;
use std::str::FromStr;

use crate::core::error::CodecInfoError;

/// A dotted component version.
///
/// Major and minor are always present; build and revision only when the
/// source string carried them. Ordering treats an absent component as lower
/// than zero, so `1.0 < 1.0.0`.
///
/// # Example
///
/// ```rust
/// use codeckit::CodecVersion;
///
/// let v: CodecVersion = "1.0.0.0".parse()?;
/// assert_eq!(v.major, 1);
/// assert_eq!(v.to_string(), "1.0.0.0");
/// # Ok::<(), codeckit::CodecInfoError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecVersion {
    /// Major version number
    pub major: u32,
    /// Minor version number
    pub minor: u32,
    /// Build number, if the source string carried a third component
    pub build: Option<u32>,
    /// Revision number, if the source string carried a fourth component
    pub revision: Option<u32>,
}

impl CodecVersion {
    /// The all-zero version.
    ///
    /// Returned for components that report an empty version string.
    pub const ZERO: CodecVersion = CodecVersion {
        major: 0,
        minor: 0,
        build: None,
        revision: None,
    };

    /// Create a two-component version.
    pub const fn new(major: u32, minor: u32) -> Self {
        CodecVersion {
            major,
            minor,
            build: None,
            revision: None,
        }
    }
}

impl FromStr for CodecVersion {
    type Err = CodecInfoError;

    /// Parse a dotted version with two to four decimal components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecInfoError::InvalidVersion(s.to_string());

        let mut parts = s.split('.');
        let mut next = || -> Result<u32, CodecInfoError> {
            parts
                .next()
                .ok_or_else(invalid)?
                .parse::<u32>()
                .map_err(|_| invalid())
        };

        let major = next()?;
        let minor = next()?;

        let mut version = CodecVersion::new(major, minor);
        let rest: Vec<&str> = parts.collect();
        match rest.as_slice() {
            [] => {}
            [build] => {
                version.build = Some(build.parse().map_err(|_| invalid())?);
            }
            [build, revision] => {
                version.build = Some(build.parse().map_err(|_| invalid())?);
                version.revision = Some(revision.parse().map_err(|_| invalid())?);
            }
            _ => return Err(invalid()),
        }
        Ok(version)
    }
}

impl fmt::Display for CodecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{}", build)?;
            if let Some(revision) = self.revision {
                write!(f, ".{}", revision)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_components() {
        let v: CodecVersion = "1.0.0.0".parse().unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 0);
        assert_eq!(v.build, Some(0));
        assert_eq!(v.revision, Some(0));
    }

    #[test]
    fn test_parse_two_components() {
        let v: CodecVersion = "2.15".parse().unwrap();
        assert_eq!(v, CodecVersion::new(2, 15));
        assert_eq!(v.build, None);
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["1.0", "1.0.2", "10.4.0.7"] {
            let v: CodecVersion = s.parse().unwrap();
            assert_eq!(v.to_string(), s);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for s in ["", "1", "1.2.3.4.5", "1.a", "1..2", "-1.0"] {
            let result = s.parse::<CodecVersion>();
            assert!(
                matches!(result, Err(CodecInfoError::InvalidVersion(_))),
                "expected {:?} to be rejected",
                s
            );
        }
    }

    #[test]
    fn test_ordering() {
        let base: CodecVersion = "1.0".parse().unwrap();
        let with_build: CodecVersion = "1.0.0".parse().unwrap();
        let newer: CodecVersion = "1.1".parse().unwrap();
        assert!(base < with_build);
        assert!(with_build < newer);
        assert!(CodecVersion::ZERO < base);
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(CodecVersion::default(), CodecVersion::ZERO);
        assert_eq!(CodecVersion::ZERO.to_string(), "0.0");
    }
}
