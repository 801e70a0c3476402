//! Immutable generated version artifact.

use crate::semver::SemanticVersion;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Frozen version snapshot produced by one generation pass.
///
/// The only construction path is [`VersionRecord::freeze`]: fields are
/// private, there is no `new`, no `Deserialize`, and no mutation surface.
/// Once frozen, every accessor returns the values captured at generation
/// time, so sharing an artifact across threads is safe by construction.
///
/// The artifact is `Serialize` so the external writer can persist it; the
/// epoch it carries is "when this artifact was produced", never "now".
///
/// [`VersionRecord::freeze`]: crate::record::VersionRecord::freeze
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVersion {
    #[serde(flatten)]
    version: SemanticVersion,
    project: Box<str>,
    epoch_ms: u64,
}

impl GeneratedVersion {
    pub(crate) fn from_record_fields(
        version: SemanticVersion,
        project: Box<str>,
        epoch_ms: u64,
    ) -> Self {
        Self {
            version,
            project,
            epoch_ms,
        }
    }

    /// Returns the major version.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.version.major
    }

    /// Returns the minor version.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.version.minor
    }

    /// Returns the patch version.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.version.patch
    }

    /// Returns the pre-release segment without its delimiter.
    #[must_use]
    pub fn pre_release(&self) -> &str {
        &self.version.pre_release
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

    /// Returns the structured version fields.
    #[must_use]
    pub const fn version(&self) -> &SemanticVersion {
        &self.version
    }

    /// Returns the canonical version string.
    ///
    /// Formatted as `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILDMETADATA]`, e.g.
    /// `1.0.0`, `1.0.0-beta`, `1.0.0+20160124144700`, `1.0.0-alpha+001`.
    #[must_use]
    pub fn version_string(&self) -> String {
        self.version.to_string()
    }

    /// Returns the build epoch in milliseconds.
    #[must_use]
    pub const fn epoch_ms(&self) -> u64 {
        self.epoch_ms
    }

    /// Returns the build date as a [`SystemTime`].
    #[must_use]
    pub fn build_time(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.epoch_ms)
    }
}

impl fmt::Display for GeneratedVersion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.version.fmt(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VersionRecord;

    fn example_artifact() -> GeneratedVersion {
        let mut record = VersionRecord::at_epoch(1_454_031_375_359);
        record.set_major(3);
        record.set_minor(1);
        record.set_patch(37);
        record.set_pre_release("beta");
        record.set_project("Example");
        record.freeze()
    }

    #[test]
    fn accessors_expose_frozen_fields() {
        let artifact = example_artifact();

        assert_eq!(artifact.major(), 3);
        assert_eq!(artifact.minor(), 1);
        assert_eq!(artifact.patch(), 37);
        assert_eq!(artifact.pre_release(), "beta");
        assert_eq!(artifact.pre_release_tag(), "-beta");
        assert_eq!(artifact.build_metadata(), "");
        assert_eq!(artifact.build_metadata_tag(), "");
        assert_eq!(artifact.project(), "Example");
        assert_eq!(artifact.version_string(), "3.1.37-beta");
        assert_eq!(artifact.to_string(), "3.1.37-beta");
    }

    #[test]
    fn repeated_queries_return_identical_values() {
        let artifact = example_artifact();

        assert_eq!(artifact.version_string(), artifact.version_string());
        assert_eq!(artifact.epoch_ms(), artifact.epoch_ms());
        assert_eq!(artifact.build_time(), artifact.build_time());
    }

    #[test]
    fn build_time_reflects_the_generation_epoch() {
        let artifact = example_artifact();
        let expected = UNIX_EPOCH + Duration::from_millis(1_454_031_375_359);

        assert_eq!(artifact.build_time(), expected);
    }

    #[test]
    fn artifacts_with_identical_fields_are_equal() {
        assert_eq!(example_artifact(), example_artifact());
    }

    #[test]
    fn serializes_with_camel_case_wire_names() -> Result<(), serde_json::Error> {
        let artifact = example_artifact();
        let value = serde_json::to_value(&artifact)?;
        let expected = serde_json::json!({
            "major": 3,
            "minor": 1,
            "patch": 37,
            "preRelease": "beta",
            "project": "Example",
            "epochMs": 1_454_031_375_359_u64,
        });

        assert_eq!(value, expected);
        Ok(())
    }
}
