//! Jetstream package root
//!
//! Exposes the version of the installed `mhkb-jetstream` distribution as a
//! process-wide, read-only value. The version is resolved once, on first
//! access, from the package metadata Cargo recorded at build time. Builds
//! without that metadata report [`FALLBACK_VERSION`].
//!
//! ```ignore
//! println!("jetstream {}", jetstream::version());
//! ```

use std::sync::LazyLock;

use jetstream_core::application::VersionResolver;
use jetstream_infra_system::build_metadata_index;

pub use jetstream_core::application::{DISTRIBUTION_NAME, FALLBACK_VERSION};
pub use jetstream_core::domain::{ResolvedVersion, VersionSource};

/// Process-wide resolved version
///
/// Wired to this crate's build metadata (Composition Root).
pub static VERSION: LazyLock<ResolvedVersion> =
    LazyLock::new(|| VersionResolver::new(build_metadata_index!()).resolve().clone());

/// Installed version string, or [`FALLBACK_VERSION`]
pub fn version() -> &'static str {
    VERSION.as_str()
}

/// Whether [`version`] came from metadata or the fallback literal
pub fn version_source() -> VersionSource {
    VERSION.source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_build_metadata() {
        // Built by Cargo under the distribution's own package name
        assert_eq!(env!("CARGO_PKG_NAME"), DISTRIBUTION_NAME);
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(version_source(), VersionSource::Installed);
    }

    #[test]
    fn test_version_is_stable() {
        let first = version();
        let second = version();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }
}
