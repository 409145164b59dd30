//! Version resolver
//!
//! Resolves the version recorded for a distribution in a [`MetadataIndex`],
//! substituting a fallback literal when the index has nothing usable.
//! The index is queried at most once per resolver.

use std::sync::OnceLock;

use tracing::{debug, warn};

use super::constants::{DISTRIBUTION_NAME, FALLBACK_VERSION};
use crate::domain::{DistributionName, ResolvedVersion, Version};
use crate::error::Result;
use crate::port::{MetadataError, MetadataIndex};

/// Best-effort version resolver
pub struct VersionResolver<I: MetadataIndex> {
    index: I,
    distribution: DistributionName,
    fallback: Version,
    resolved: OnceLock<ResolvedVersion>,
}

impl<I: MetadataIndex> VersionResolver<I> {
    /// Resolver for the default distribution and fallback literal
    pub fn new(index: I) -> Self {
        Self::with_distribution(
            index,
            DistributionName::from_static(DISTRIBUTION_NAME),
            Version::from_static(FALLBACK_VERSION),
        )
    }

    pub fn with_distribution(index: I, distribution: DistributionName, fallback: Version) -> Self {
        Self {
            index,
            distribution,
            fallback,
            resolved: OnceLock::new(),
        }
    }

    pub fn distribution(&self) -> &DistributionName {
        &self.distribution
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Strict lookup without fallback
    ///
    /// Queries the index on every call and surfaces its errors.
    pub fn try_resolve(&self) -> Result<ResolvedVersion> {
        let recorded = self.index.version(&self.distribution)?;
        let version = Version::new(recorded)?;
        Ok(ResolvedVersion::installed(version))
    }

    /// Best-effort lookup, cached after the first call
    ///
    /// Never fails: any lookup failure yields the fallback literal.
    pub fn resolve(&self) -> &ResolvedVersion {
        self.resolved.get_or_init(|| self.lookup())
    }

    /// Shorthand for `resolve().as_str()`
    pub fn version(&self) -> &str {
        self.resolve().as_str()
    }

    fn lookup(&self) -> ResolvedVersion {
        let recorded = match self.index.version(&self.distribution) {
            Ok(recorded) => recorded,
            Err(MetadataError::NotFound { .. }) => {
                debug!(
                    distribution = %self.distribution,
                    fallback = %self.fallback,
                    "No installed metadata, using fallback version"
                );
                return self.fallback();
            }
            Err(e) => {
                warn!(
                    distribution = %self.distribution,
                    error = %e,
                    "Metadata lookup failed, using fallback version"
                );
                return self.fallback();
            }
        };

        match Version::new(recorded) {
            Ok(version) => {
                debug!(
                    distribution = %self.distribution,
                    version = %version,
                    "Resolved installed version"
                );
                ResolvedVersion::installed(version)
            }
            Err(e) => {
                warn!(
                    distribution = %self.distribution,
                    error = %e,
                    "Recorded version unusable, using fallback version"
                );
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> ResolvedVersion {
        ResolvedVersion::fallback(self.fallback.clone())
    }
}

impl<I: MetadataIndex> std::fmt::Debug for VersionResolver<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionResolver")
            .field("distribution", &self.distribution)
            .field("fallback", &self.fallback)
            .field("resolved", &self.resolved.get())
            .finish()
    }
}
