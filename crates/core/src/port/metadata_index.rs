// Metadata Index Port (installed distribution records)

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::DistributionName;

/// Metadata lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("No metadata recorded for distribution {distribution}")]
    NotFound { distribution: String },

    #[error("Metadata index unreadable: {0}")]
    Unreadable(String),

    #[error("Metadata index malformed: {0}")]
    Malformed(String),
}

impl MetadataError {
    pub fn not_found(distribution: &DistributionName) -> Self {
        MetadataError::NotFound {
            distribution: distribution.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MetadataError::NotFound { .. })
    }
}

/// Local package-installation metadata index
///
/// Maps a distribution name to the version string recorded for it.
/// Lookups are synchronous and local (no network).
#[cfg_attr(test, mockall::automock)]
pub trait MetadataIndex: Send + Sync {
    /// Look up the recorded version for `distribution`
    ///
    /// # Returns
    /// The version string exactly as recorded, or
    /// `MetadataError::NotFound` when the index has no entry.
    fn version(&self, distribution: &DistributionName) -> Result<String, MetadataError>;
}

impl<T: MetadataIndex + ?Sized> MetadataIndex for std::sync::Arc<T> {
    fn version(&self, distribution: &DistributionName) -> Result<String, MetadataError> {
        (**self).version(distribution)
    }
}

impl<T: MetadataIndex + ?Sized> MetadataIndex for Box<T> {
    fn version(&self, distribution: &DistributionName) -> Result<String, MetadataError> {
        (**self).version(distribution)
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory metadata index for testing and embedding
    #[derive(Debug, Default)]
    pub struct InMemoryIndex {
        entries: HashMap<String, String>,
        lookups: AtomicUsize,
    }

    impl InMemoryIndex {
        pub fn new() -> Self {
            Self::default()
        }

        /// Record `version` for `distribution`
        pub fn with_entry(mut self, distribution: &str, version: &str) -> Self {
            self.entries
                .insert(distribution.to_string(), version.to_string());
            self
        }

        /// Number of lookups served so far
        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl MetadataIndex for InMemoryIndex {
        fn version(&self, distribution: &DistributionName) -> Result<String, MetadataError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.entries
                .get(distribution.as_str())
                .cloned()
                .ok_or_else(|| MetadataError::not_found(distribution))
        }
    }

    /// Index that always fails with the given error
    #[derive(Debug)]
    pub struct FailingIndex(pub MetadataError);

    impl MetadataIndex for FailingIndex {
        fn version(&self, _distribution: &DistributionName) -> Result<String, MetadataError> {
            Err(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::InMemoryIndex;
    use super::*;

    #[test]
    fn test_in_memory_index_lookup() {
        let index = InMemoryIndex::new().with_entry("mhkb-jetstream", "1.2.3");
        let name = DistributionName::new("mhkb-jetstream").unwrap();

        assert_eq!(index.version(&name).unwrap(), "1.2.3");
        assert_eq!(index.lookups(), 1);
    }

    #[test]
    fn test_in_memory_index_not_found() {
        let index = InMemoryIndex::new().with_entry("other", "9.9.9");
        let name = DistributionName::new("mhkb-jetstream").unwrap();

        let err = index.version(&name).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("mhkb-jetstream"));
    }

    #[test]
    fn test_arc_index_delegates() {
        let index = std::sync::Arc::new(InMemoryIndex::new().with_entry("a", "0.1.0"));
        let name = DistributionName::new("a").unwrap();

        assert_eq!(index.version(&name).unwrap(), "0.1.0");
        assert_eq!(index.lookups(), 1);
    }
}
