// Build metadata index
// reason: Cargo records package name/version at compile time; plain rustc builds record nothing
use tracing::debug;

use jetstream_core::domain::DistributionName;
use jetstream_core::port::{MetadataError, MetadataIndex};

/// Index over the package metadata Cargo recorded when a crate was compiled
///
/// Holds at most one entry. Build it with [`build_metadata_index!`] so the
/// metadata belongs to the calling crate, not to this one.
///
/// # Example
/// ```ignore
/// let index = jetstream_infra_system::build_metadata_index!();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMetadataIndex {
    package: Option<&'static str>,
    version: Option<&'static str>,
}

impl BuildMetadataIndex {
    pub const fn new(package: Option<&'static str>, version: Option<&'static str>) -> Self {
        Self { package, version }
    }

    /// Index for a build without packaging metadata
    pub const fn empty() -> Self {
        Self::new(None, None)
    }

    pub fn package(&self) -> Option<&'static str> {
        self.package
    }
}

impl MetadataIndex for BuildMetadataIndex {
    fn version(&self, distribution: &DistributionName) -> Result<String, MetadataError> {
        match (self.package, self.version) {
            (Some(package), Some(version)) if package == distribution.as_str() => {
                debug!(
                    distribution = %distribution,
                    version = %version,
                    "Build metadata matched"
                );
                Ok(version.to_string())
            }
            _ => Err(MetadataError::not_found(distribution)),
        }
    }
}

/// Build a [`BuildMetadataIndex`] from the invoking crate's Cargo metadata
#[macro_export]
macro_rules! build_metadata_index {
    () => {
        $crate::BuildMetadataIndex::new(
            ::core::option_env!("CARGO_PKG_NAME"),
            ::core::option_env!("CARGO_PKG_VERSION"),
        )
    };
}
