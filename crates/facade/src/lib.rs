//! # buildver-facade
//!
//! Facade API for consumers (declaration sources, writers, release tooling).
//! This crate depends on `domain` and `shared`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use buildver_domain::{
    DEFAULT_ARTIFACT_NAME, GeneratedVersion, SegmentKind, SemVerError, SemanticVersion,
    VersionComponent, VersionDeclaration, VersionRecord,
};
pub use buildver_shared::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, Result};

/// Placeholder module for the facade layer.
pub mod placeholder {
    /// Placeholder function to verify the crate compiles.
    #[must_use]
    pub const fn facade_crate_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

pub use placeholder::facade_crate_version;

/// Run one generation pass: build a record from the declaration, sample the
/// clock once, and freeze it into an immutable artifact.
#[must_use]
pub fn generate_version(declaration: VersionDeclaration) -> GeneratedVersion {
    let artifact = VersionRecord::from_declaration(declaration).freeze();
    trace_generated(&artifact);
    artifact
}

/// Run one generation pass with a caller-supplied build epoch.
///
/// Deterministic variant of [`generate_version`] for reproducible builds and
/// tests: the clock is an explicit input instead of an ambient read.
#[must_use]
pub fn generate_version_at(declaration: VersionDeclaration, epoch_ms: u64) -> GeneratedVersion {
    let artifact = VersionRecord::from_declaration_at(declaration, epoch_ms).freeze();
    trace_generated(&artifact);
    artifact
}

/// Parse a canonical version string, surfacing failures as shared error envelopes.
pub fn parse_version(input: &str) -> Result<SemanticVersion> {
    SemanticVersion::parse(input).map_err(ErrorEnvelope::from)
}

fn trace_generated(artifact: &GeneratedVersion) {
    tracing::debug!(
        version = %artifact,
        project = artifact.project(),
        epoch_ms = artifact.epoch_ms(),
        "generated version artifact"
    );
}
