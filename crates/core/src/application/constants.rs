// Version resolution constants (ADR: No magic values)

/// Distribution whose installed metadata is queried
pub const DISTRIBUTION_NAME: &str = "mhkb-jetstream";

/// Substituted when no installation metadata is found
/// Marks a local build that was not installed through normal packaging
pub const FALLBACK_VERSION: &str = "0.0.0+local";
