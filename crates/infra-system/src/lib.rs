// Jetstream Infrastructure - System Adapters
// Implements: MetadataIndex (ADR-001)

pub mod build_metadata;
pub mod cargo_install_index;

pub use build_metadata::BuildMetadataIndex;
pub use cargo_install_index::CargoInstallIndex;
