//! # buildver-domain
//!
//! Version record, generated artifact, and semver formatting.
//!
//! This crate contains the core version model with no infrastructure dependencies:
//!
//! - **Semver** - `SemanticVersion` with canonical formatting and strict parsing
//! - **Record** - `VersionRecord`, the mutable holder for one generation pass
//! - **Artifact** - `GeneratedVersion`, the frozen snapshot consumers query
//! - **Declaration** - `VersionDeclaration`, the typed input hand-off
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or writer dependencies
//! - Pure version logic with no I/O (the one clock read is construction-time)

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use buildver_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod artifact;
pub mod declaration;
pub mod record;
pub mod semver;

pub use artifact::GeneratedVersion;
pub use declaration::VersionDeclaration;
pub use record::{DEFAULT_ARTIFACT_NAME, VersionRecord};
pub use semver::{SegmentKind, SemVerError, SemanticVersion, VersionComponent};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_crate_compiles() {
        let version = domain_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn domain_depends_on_shared() {
        // Verify we can access shared crate
        let shared_version = shared_crate_version();
        assert!(!shared_version.is_empty());
    }
}
