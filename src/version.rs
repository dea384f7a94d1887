//! Protocol version helper.

use std::{fmt, str::FromStr};

use anyhow::{bail, ensure, Context, Result};

use crate::field::SEMVER;

/// Helper structure to compare protocol versions.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Make version helper.
pub const fn version(major: u32, minor: u32, patch: u32) -> Version {
    Version { major, minor, patch }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ensure!(SEMVER.is_match(s), "Version must be MAJOR.MINOR.PATCH, got: {:?}", s);

        let parts = s
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .with_context(|| format!("Version component out of range: {}", part))
            })
            .collect::<Result<Vec<_>>>()?;

        let &[major, minor, patch] = parts.as_slice() else {
            bail!("Version must have three components, got: {:?}", s)
        };

        Ok(version(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_cmp() {
        assert!(version(0, 9, 0) != version(0, 9, 1));
        assert!(version(1, 0, 0) == version(1, 0, 0));
        assert!(version(0, 9, 0) < version(0, 10, 0));
        assert!(version(1, 0, 0) > version(0, 99, 99));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.0.1".parse::<Version>().unwrap(), version(1, 0, 1));
        assert_eq!(version(10, 2, 33).to_string(), "10.2.33");
    }

    #[test]
    fn test_invalid() {
        assert!("1.0".parse::<Version>().is_err());
        assert!("1.0.0-beta".parse::<Version>().is_err());
        assert!("99999999999.0.0".parse::<Version>().is_err());
    }
}
