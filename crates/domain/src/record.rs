//! Mutable version record populated during a single generation pass.

use crate::artifact::GeneratedVersion;
use crate::declaration::VersionDeclaration;
use crate::semver::SemanticVersion;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default name for the persisted artifact.
pub const DEFAULT_ARTIFACT_NAME: &str = "generated_version";

/// Mutable version state for one generation pass.
///
/// A record is created fresh per generation event, populated by the
/// declaration source, and consumed by [`VersionRecord::freeze`]. The build
/// epoch is captured exactly once at construction and has no setter; two
/// reads of [`VersionRecord::epoch_ms`] on the same record always agree.
///
/// Setters perform no validation: the declaration source owns input hygiene,
/// and garbage values simply render a non-conformant version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    version: SemanticVersion,
    project: Box<str>,
    artifact_name: Box<str>,
    namespace: Box<str>,
    epoch_ms: u64,
}

impl VersionRecord {
    /// Create a record with default values, sampling the clock once.
    #[must_use]
    pub fn new() -> Self {
        Self::at_epoch(now_epoch_ms())
    }

    /// Create a record with default values and a caller-supplied epoch.
    ///
    /// This is the deterministic construction path: the build timestamp is an
    /// explicit input instead of an ambient clock read.
    #[must_use]
    pub fn at_epoch(epoch_ms: u64) -> Self {
        Self {
            version: SemanticVersion::default(),
            project: Box::default(),
            artifact_name: DEFAULT_ARTIFACT_NAME.into(),
            namespace: Box::default(),
            epoch_ms,
        }
    }

    /// Create a fully-specified record from a declaration, sampling the clock once.
    #[must_use]
    pub fn from_declaration(declaration: VersionDeclaration) -> Self {
        Self::from_declaration_at(declaration, now_epoch_ms())
    }

    /// Create a fully-specified record from a declaration with a caller-supplied epoch.
    ///
    /// Declared values are taken as-is; nothing is re-validated.
    #[must_use]
    pub fn from_declaration_at(declaration: VersionDeclaration, epoch_ms: u64) -> Self {
        Self {
            version: SemanticVersion {
                major: declaration.major,
                minor: declaration.minor,
                patch: declaration.patch,
                pre_release: declaration.pre_release,
                build_metadata: declaration.build_metadata,
            },
            project: declaration.project,
            artifact_name: declaration.artifact_name,
            namespace: declaration.namespace,
            epoch_ms,
        }
    }

    /// Returns the major version.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.version.major
    }

    /// Sets the major version.
    pub const fn set_major(&mut self, major: u64) {
        self.version.major = major;
    }

    /// Returns the minor version.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.version.minor
    }

    /// Sets the minor version.
    pub const fn set_minor(&mut self, minor: u64) {
        self.version.minor = minor;
    }

    /// Returns the patch version.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.version.patch
    }

    /// Sets the patch version.
    pub const fn set_patch(&mut self, patch: u64) {
        self.version.patch = patch;
    }

    /// Returns the pre-release segment without its delimiter.
    #[must_use]
    pub fn pre_release(&self) -> &str {
        &self.version.pre_release
    }

    /// Sets the pre-release segment (without the `-` delimiter).
    pub fn set_pre_release(&mut self, pre_release: impl Into<Box<str>>) {
        self.version.pre_release = pre_release.into();
    }

    /// Returns the pre-release segment with its `-` delimiter, or `""`.
    #[must_use]
    pub fn pre_release_tag(&self) -> String {
        self.version.pre_release_tag()
    }

    /// Returns the build metadata segment without its delimiter.
    #[must_use]
    pub fn build_metadata(&self) -> &str {
        &self.version.build_metadata
    }

    /// Sets the build metadata segment (without the `+` delimiter).
    pub fn set_build_metadata(&mut self, build_metadata: impl Into<Box<str>>) {
        self.version.build_metadata = build_metadata.into();
    }

    /// Returns the build metadata segment with its `+` delimiter, or `""`.
    #[must_use]
    pub fn build_metadata_tag(&self) -> String {
        self.version.build_metadata_tag()
    }

    /// Returns the project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Sets the project name.
    pub fn set_project(&mut self, project: impl Into<Box<str>>) {
        self.project = project.into();
    }

    /// Returns the artifact name.
    #[must_use]
    pub fn artifact_name(&self) -> &str {
        &self.artifact_name
    }

    /// Sets the artifact name.
    pub fn set_artifact_name(&mut self, artifact_name: impl Into<Box<str>>) {
        self.artifact_name = artifact_name.into();
    }

    /// Returns the namespace the artifact lives in (empty for root).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Sets the namespace.
    pub fn set_namespace(&mut self, namespace: impl Into<Box<str>>) {
        self.namespace = namespace.into();
    }

    /// Returns the structured version fields.
    #[must_use]
    pub const fn version(&self) -> &SemanticVersion {
        &self.version
    }

    /// Returns the canonical version string.
    #[must_use]
    pub fn version_string(&self) -> String {
        self.version.to_string()
    }

    /// Returns the build epoch in milliseconds, captured at construction.
    #[must_use]
    pub const fn epoch_ms(&self) -> u64 {
        self.epoch_ms
    }

    /// Freeze this record into an immutable [`GeneratedVersion`].
    ///
    /// Consumes the record: a generation pass produces exactly one artifact,
    /// and a record is never reused across passes.
    #[must_use]
    pub fn freeze(self) -> GeneratedVersion {
        GeneratedVersion::from_record_fields(self.version, self.project, self.epoch_ms)
    }
}

impl Default for VersionRecord {
    fn default() -> Self {
        Self::new()
    }
}

fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| {
            u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_reports_all_zero_version() {
        let record = VersionRecord::at_epoch(0);

        assert_eq!(record.major(), 0);
        assert_eq!(record.minor(), 0);
        assert_eq!(record.patch(), 0);
        assert_eq!(record.pre_release(), "");
        assert_eq!(record.build_metadata(), "");
        assert_eq!(record.project(), "");
        assert_eq!(record.artifact_name(), DEFAULT_ARTIFACT_NAME);
        assert_eq!(record.namespace(), "");
        assert_eq!(record.version_string(), "0.0.0");
    }

    #[test]
    fn setters_update_each_field_independently() {
        let mut record = VersionRecord::at_epoch(1_454_031_375_359);
        record.set_major(3);
        record.set_minor(1);
        record.set_patch(37);
        record.set_pre_release("beta");
        record.set_build_metadata("001");
        record.set_project("Example");
        record.set_artifact_name("example_version");
        record.set_namespace("example::release");

        assert_eq!(record.version_string(), "3.1.37-beta+001");
        assert_eq!(record.pre_release_tag(), "-beta");
        assert_eq!(record.build_metadata_tag(), "+001");
        assert_eq!(record.project(), "Example");
        assert_eq!(record.artifact_name(), "example_version");
        assert_eq!(record.namespace(), "example::release");
    }

    #[test]
    fn setters_do_not_validate() {
        let mut record = VersionRecord::at_epoch(0);
        record.set_pre_release("-already-prefixed");

        // Garbage in, non-conformant string out.
        assert_eq!(record.version_string(), "0.0.0--already-prefixed");
    }

    #[test]
    fn epoch_is_captured_once_and_stable() {
        let record = VersionRecord::new();
        assert_eq!(record.epoch_ms(), record.epoch_ms());

        let pinned = VersionRecord::at_epoch(1_454_031_375_359);
        assert_eq!(pinned.epoch_ms(), 1_454_031_375_359);
    }

    #[test]
    fn from_declaration_copies_every_field() {
        let declaration = VersionDeclaration {
            major: 1,
            minor: 0,
            patch: 0,
            pre_release: "alpha".into(),
            build_metadata: "001".into(),
            project: "Example".into(),
            artifact_name: "example_version".into(),
            namespace: "example".into(),
        };
        let record = VersionRecord::from_declaration_at(declaration, 42);

        assert_eq!(record.version_string(), "1.0.0-alpha+001");
        assert_eq!(record.project(), "Example");
        assert_eq!(record.artifact_name(), "example_version");
        assert_eq!(record.namespace(), "example");
        assert_eq!(record.epoch_ms(), 42);
    }

    #[test]
    fn freeze_carries_fields_into_the_artifact() {
        let mut record = VersionRecord::at_epoch(7);
        record.set_major(2);
        record.set_pre_release("rc.1");
        record.set_project("buildver");

        let artifact = record.freeze();
        assert_eq!(artifact.version_string(), "2.0.0-rc.1");
        assert_eq!(artifact.project(), "buildver");
        assert_eq!(artifact.epoch_ms(), 7);
    }
}
