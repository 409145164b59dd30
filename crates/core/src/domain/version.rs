// Version Domain Model

use serde::{Deserialize, Serialize};

use super::error::{DomainError, Result};

/// Distribution name (the installable unit whose metadata is queried)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistributionName(String);

impl DistributionName {
    /// Validate and wrap a distribution name
    ///
    /// Names must be non-empty and contain no whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDistributionName(name));
        }
        Ok(Self(name))
    }

    /// Wrap a compile-time constant known to be valid
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DistributionName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DistributionName> for String {
    fn from(name: DistributionName) -> Self {
        name.0
    }
}

impl std::fmt::Display for DistributionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recorded version string (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(String);

impl Version {
    /// Wrap a version string exactly as recorded
    ///
    /// Blank strings are rejected; the value is otherwise kept verbatim.
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(DomainError::EmptyVersion);
        }
        Ok(Self(version))
    }

    /// Wrap a compile-time constant known to be non-empty
    pub(crate) fn from_static(version: &'static str) -> Self {
        Self(version.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Version {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionSource {
    /// Read from the metadata index
    Installed,
    /// Substituted because no usable metadata was found
    Fallback,
}

impl std::fmt::Display for VersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSource::Installed => write!(f, "INSTALLED"),
            VersionSource::Fallback => write!(f, "FALLBACK"),
        }
    }
}

/// Outcome of a version resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVersion {
    pub version: Version,
    pub source: VersionSource,
}

impl ResolvedVersion {
    pub fn installed(version: Version) -> Self {
        Self {
            version,
            source: VersionSource::Installed,
        }
    }

    pub fn fallback(version: Version) -> Self {
        Self {
            version,
            source: VersionSource::Fallback,
        }
    }

    pub fn as_str(&self) -> &str {
        self.version.as_str()
    }

    pub fn is_fallback(&self) -> bool {
        self.source == VersionSource::Fallback
    }
}
