// Port Layer - Interfaces for external dependencies

pub mod metadata_index;

// Re-exports
pub use metadata_index::{MetadataError, MetadataIndex};
