//! Input contract supplied by the external declaration source.

use crate::record::DEFAULT_ARTIFACT_NAME;
use serde::{Deserialize, Serialize};

/// Version fields as declared by the external declaration source.
///
/// This is the typed hand-off at the generation boundary: the declaration
/// source supplies non-negative numbers and segment strings without their
/// delimiter prefixes, and nothing here is re-validated. Missing fields fall
/// back to their defaults (an all-zero version, empty strings, and the
/// default artifact name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionDeclaration {
    /// Major version.
    pub major: u64,
    /// Minor version.
    pub minor: u64,
    /// Patch version.
    pub patch: u64,
    /// Pre-release segment without its `-` delimiter.
    pub pre_release: Box<str>,
    /// Build metadata segment without its `+` delimiter.
    pub build_metadata: Box<str>,
    /// Human-readable project name.
    pub project: Box<str>,
    /// Name of the persisted artifact.
    pub artifact_name: Box<str>,
    /// Namespace the artifact lives in (empty for root).
    pub namespace: Box<str>,
}

impl Default for VersionDeclaration {
    fn default() -> Self {
        Self {
            major: 0,
            minor: 0,
            patch: 0,
            pre_release: Box::default(),
            build_metadata: Box::default(),
            project: Box::default(),
            artifact_name: DEFAULT_ARTIFACT_NAME.into(),
            namespace: Box::default(),
        }
    }
}
