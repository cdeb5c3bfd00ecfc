use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ServiceVersionError};

/// Pattern applied to the manifest version string.
///
/// The third group matches exactly one digit, so `10.20.300` still matches
/// (on `10.20.3`) and yields `10.20`.
pub const VERSION_PATTERN: &str = r"(\d+)\.(\d+)\.(\d)";

/// The major and minor components extracted from a manifest version.
///
/// Components are kept as the digit runs found in the source string, so
/// `01.002.3` renders back as `01.002`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion {
    pub major: String,
    pub minor: String,
}

impl BaseVersion {
    /// Creates a BaseVersion from already extracted components.
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        BaseVersion {
            major: major.into(),
            minor: minor.into(),
        }
    }

    /// Extracts major and minor from the first match of [`VERSION_PATTERN`].
    ///
    /// The search is unanchored: any text before or after the first match is
    /// ignored.
    ///
    /// # Arguments
    /// * `version` - Version string from the manifest (e.g. "1.2.3")
    ///
    /// # Returns
    /// * `Ok(BaseVersion)` - Captured major and minor
    /// * `Err` - Parse error if the pattern does not match
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(BaseVersion::extract("1.2.3")?, BaseVersion::new("1", "2"));
    /// assert_eq!(BaseVersion::extract("v10.20.300")?, BaseVersion::new("10", "20"));
    /// assert!(BaseVersion::extract("1.2").is_err());
    /// ```
    pub fn extract(version: &str) -> Result<Self> {
        let re = Regex::new(VERSION_PATTERN)
            .map_err(|e| ServiceVersionError::parse(format!("invalid version pattern: {}", e)))?;

        let captures = re.captures(version).ok_or_else(|| {
            ServiceVersionError::parse(format!(
                "version '{}' does not match {}",
                version, VERSION_PATTERN
            ))
        })?;

        match (captures.get(1), captures.get(2)) {
            (Some(major), Some(minor)) => Ok(BaseVersion::new(major.as_str(), minor.as_str())),
            _ => Err(ServiceVersionError::parse(format!(
                "version '{}' is missing major or minor component",
                version
            ))),
        }
    }
}

impl FromStr for BaseVersion {
    type Err = ServiceVersionError;

    fn from_str(s: &str) -> Result<Self> {
        BaseVersion::extract(s)
    }
}

impl fmt::Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
