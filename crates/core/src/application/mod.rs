// Application Layer - Use Cases

pub mod constants;
pub mod version_resolver;

// Re-exports
pub use constants::{DISTRIBUTION_NAME, FALLBACK_VERSION};
pub use version_resolver::VersionResolver;
