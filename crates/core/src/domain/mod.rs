// Domain Layer - Pure value types

pub mod error;
pub mod version;

// Re-exports
pub use error::DomainError;
pub use version::{DistributionName, ResolvedVersion, Version, VersionSource};
