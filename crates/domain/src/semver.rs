//! Semantic version value type with canonical formatting and strict parsing.

use buildver_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Core version component names used in parse diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComponent {
    /// The MAJOR component.
    Major,
    /// The MINOR component.
    Minor,
    /// The PATCH component.
    Patch,
}

impl VersionComponent {
    /// Returns the canonical lowercase component name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Optional segment names used in parse diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// The `-` delimited pre-release segment.
    PreRelease,
    /// The `+` delimited build metadata segment.
    BuildMetadata,
}

impl SegmentKind {
    /// Returns the canonical segment name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreRelease => "pre-release",
            Self::BuildMetadata => "build metadata",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Parse failures for canonical version strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemVerError {
    /// The core is not exactly `MAJOR.MINOR.PATCH`.
    MalformedCore {
        /// The dotted core as encountered (pre-release and build stripped).
        input: String,
    },
    /// A core component is empty, non-decimal, or out of range.
    InvalidNumber {
        /// Which core component failed.
        component: VersionComponent,
        /// The offending component text.
        input: String,
    },
    /// A core component has a leading zero.
    LeadingZero {
        /// Which core component failed.
        component: VersionComponent,
        /// The offending component text.
        input: String,
    },
    /// A dot-separated identifier in an optional segment is empty.
    EmptyIdentifier {
        /// Which optional segment failed.
        segment: SegmentKind,
    },
    /// An identifier contains a character outside `[0-9A-Za-z-]`.
    InvalidIdentifier {
        /// Which optional segment failed.
        segment: SegmentKind,
        /// The offending identifier.
        identifier: String,
    },
    /// A numeric pre-release identifier has a leading zero.
    NumericIdentifierLeadingZero {
        /// The offending identifier.
        identifier: String,
    },
}

impl SemVerError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::MalformedCore { .. } | Self::InvalidNumber { .. } | Self::LeadingZero { .. } => {
                ErrorCode::new("version", "invalid_core")
            },
            Self::EmptyIdentifier { segment, .. } | Self::InvalidIdentifier { segment, .. } => {
                match segment {
                    SegmentKind::PreRelease => ErrorCode::new("version", "invalid_pre_release"),
                    SegmentKind::BuildMetadata => {
                        ErrorCode::new("version", "invalid_build_metadata")
                    },
                }
            },
            Self::NumericIdentifierLeadingZero { .. } => {
                ErrorCode::new("version", "invalid_pre_release")
            },
        }
    }
}

impl fmt::Display for SemVerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCore { .. } => {
                formatter.write_str("version core must be MAJOR.MINOR.PATCH")
            },
            Self::InvalidNumber { component, .. } => {
                write!(formatter, "{component} must be a decimal number")
            },
            Self::LeadingZero { component, .. } => {
                write!(formatter, "{component} must not have a leading zero")
            },
            Self::EmptyIdentifier { segment } => {
                write!(formatter, "{segment} identifiers must be non-empty")
            },
            Self::InvalidIdentifier { segment, .. } => {
                write!(formatter, "{segment} identifiers must match [0-9A-Za-z-]")
            },
            Self::NumericIdentifierLeadingZero { .. } => formatter
                .write_str("numeric pre-release identifiers must not have a leading zero"),
        }
    }
}

impl std::error::Error for SemVerError {}

impl From<SemVerError> for ErrorEnvelope {
    fn from(error: SemVerError) -> Self {
        let mut envelope = Self::expected(error.error_code(), error.to_string());

        match error {
            SemVerError::MalformedCore { input } => {
                envelope = envelope.with_metadata("input", input);
            },
            SemVerError::InvalidNumber { component, input }
            | SemVerError::LeadingZero { component, input } => {
                envelope = envelope
                    .with_metadata("component", component.as_str())
                    .with_metadata("input", input);
            },
            SemVerError::EmptyIdentifier { segment } => {
                envelope = envelope.with_metadata("segment", segment.as_str());
            },
            SemVerError::InvalidIdentifier {
                segment,
                identifier,
            } => {
                envelope = envelope
                    .with_metadata("segment", segment.as_str())
                    .with_metadata("identifier", identifier);
            },
            SemVerError::NumericIdentifierLeadingZero { identifier } => {
                envelope = envelope.with_metadata("identifier", identifier);
            },
        }

        envelope
    }
}

/// Structured semantic version fields.
///
/// Formatting is a pure function of the five fields: identical values always
/// render the identical canonical string
/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILDMETADATA]`.
///
/// The input contract is that `pre_release` and `build_metadata` never carry
/// their own `-`/`+` delimiter prefix; the formatter alone inserts
/// delimiters. Field values are otherwise accepted as-is and not validated.
/// The strict direction is [`SemanticVersion::from_str`], which only accepts
/// strings conforming to the SemVer 2.0 grammar for these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticVersion {
    /// Major version.
    pub major: u64,
    /// Minor version.
    pub minor: u64,
    /// Patch version.
    pub patch: u64,
    /// Pre-release segment without its `-` delimiter (empty when absent).
    #[serde(default, skip_serializing_if = "str::is_empty")]
    pub pre_release: Box<str>,
    /// Build metadata segment without its `+` delimiter (empty when absent).
    #[serde(default, skip_serializing_if = "str::is_empty")]
    pub build_metadata: Box<str>,
}

impl SemanticVersion {
    /// Create a version with the given core and empty optional segments.
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Box::default(),
            build_metadata: Box::default(),
        }
    }

    /// Set the pre-release segment (without the `-` delimiter).
    #[must_use]
    pub fn with_pre_release(mut self, pre_release: impl Into<Box<str>>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    /// Set the build metadata segment (without the `+` delimiter).
    #[must_use]
    pub fn with_build_metadata(mut self, build_metadata: impl Into<Box<str>>) -> Self {
        self.build_metadata = build_metadata.into();
        self
    }

    /// Returns the pre-release segment with its `-` delimiter, or `""`.
    #[must_use]
    pub fn pre_release_tag(&self) -> String {
        if self.pre_release.is_empty() {
            String::new()
        } else {
            format!("-{}", self.pre_release)
        }
    }

    /// Returns the build metadata segment with its `+` delimiter, or `""`.
    #[must_use]
    pub fn build_metadata_tag(&self) -> String {
        if self.build_metadata.is_empty() {
            String::new()
        } else {
            format!("+{}", self.build_metadata)
        }
    }

    /// Parse a canonical version string (alias for [`str::parse`]).
    pub fn parse(input: impl AsRef<str>) -> Result<Self, SemVerError> {
        input.as_ref().parse()
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(formatter, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(formatter, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = SemVerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (rest, build_metadata) = match input.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (input, None),
        };
        let (core, pre_release) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let mut components = core.split('.');
        let (Some(major), Some(minor), Some(patch), None) = (
            components.next(),
            components.next(),
            components.next(),
            components.next(),
        ) else {
            return Err(SemVerError::MalformedCore {
                input: core.to_owned(),
            });
        };

        let major = parse_core_number(VersionComponent::Major, major)?;
        let minor = parse_core_number(VersionComponent::Minor, minor)?;
        let patch = parse_core_number(VersionComponent::Patch, patch)?;

        if let Some(segment) = pre_release {
            validate_segment(SegmentKind::PreRelease, segment)?;
        }
        if let Some(segment) = build_metadata {
            validate_segment(SegmentKind::BuildMetadata, segment)?;
        }

        let mut version = Self::new(major, minor, patch);
        if let Some(segment) = pre_release {
            version = version.with_pre_release(segment);
        }
        if let Some(segment) = build_metadata {
            version = version.with_build_metadata(segment);
        }

        Ok(version)
    }
}

fn parse_core_number(component: VersionComponent, input: &str) -> Result<u64, SemVerError> {
    if input.is_empty() || !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(SemVerError::InvalidNumber {
            component,
            input: input.to_owned(),
        });
    }
    if input.len() > 1 && input.starts_with('0') {
        return Err(SemVerError::LeadingZero {
            component,
            input: input.to_owned(),
        });
    }

    input.parse().map_err(|_| SemVerError::InvalidNumber {
        component,
        input: input.to_owned(),
    })
}

fn validate_segment(segment: SegmentKind, content: &str) -> Result<(), SemVerError> {
    for identifier in content.split('.') {
        if identifier.is_empty() {
            return Err(SemVerError::EmptyIdentifier { segment });
        }
        if !identifier
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
        {
            return Err(SemVerError::InvalidIdentifier {
                segment,
                identifier: identifier.to_owned(),
            });
        }

        // Leading zeros are only illegal for numeric pre-release identifiers;
        // build metadata identifiers may carry them (e.g. "001").
        let numeric = identifier.bytes().all(|byte| byte.is_ascii_digit());
        if segment == SegmentKind::PreRelease
            && numeric
            && identifier.len() > 1
            && identifier.starts_with('0')
        {
            return Err(SemVerError::NumericIdentifierLeadingZero {
                identifier: identifier.to_owned(),
            });
        }
    }

    Ok(())
}
