//! Integration coverage for the record-to-artifact generation lifecycle.

use buildver_domain::{
    DEFAULT_ARTIFACT_NAME, SemVerError, SemanticVersion, VersionDeclaration, VersionRecord,
};
use buildver_shared::ErrorEnvelope;

#[test]
fn generation_pass_produces_a_queryable_artifact() {
    let declaration = VersionDeclaration {
        major: 1,
        minor: 0,
        patch: 0,
        pre_release: "alpha".into(),
        build_metadata: "001".into(),
        project: "Example".into(),
        artifact_name: DEFAULT_ARTIFACT_NAME.into(),
        namespace: "example".into(),
    };

    let record = VersionRecord::from_declaration_at(declaration, 1_454_031_375_359);
    let artifact = record.freeze();

    assert_eq!(artifact.major(), 1);
    assert_eq!(artifact.minor(), 0);
    assert_eq!(artifact.patch(), 0);
    assert_eq!(artifact.pre_release_tag(), "-alpha");
    assert_eq!(artifact.build_metadata_tag(), "+001");
    assert_eq!(artifact.project(), "Example");
    assert_eq!(artifact.version_string(), "1.0.0-alpha+001");
    assert_eq!(artifact.epoch_ms(), 1_454_031_375_359);
}

#[test]
fn artifact_round_trips_through_the_canonical_string() -> Result<(), SemVerError> {
    let mut record = VersionRecord::at_epoch(0);
    record.set_major(3);
    record.set_minor(1);
    record.set_patch(37);
    record.set_pre_release("beta");
    let artifact = record.freeze();

    let reparsed: SemanticVersion = artifact.version_string().parse()?;
    assert_eq!(&reparsed, artifact.version());
    Ok(())
}

#[test]
fn record_and_artifact_format_identically() {
    let mut record = VersionRecord::at_epoch(0);
    record.set_major(2);
    record.set_pre_release("rc.2");
    record.set_build_metadata("exp.sha.5114f85");

    let rendered_by_record = record.version_string();
    let artifact = record.freeze();

    assert_eq!(artifact.version_string(), rendered_by_record);
}

#[test]
fn parse_failures_surface_as_error_envelopes() -> Result<(), SemVerError> {
    let Err(error) = SemanticVersion::parse("1.0") else {
        return Err(SemVerError::MalformedCore {
            input: "1.0".to_owned(),
        });
    };

    let envelope: ErrorEnvelope = error.into();
    assert_eq!(envelope.code.namespace(), "version");
    assert_eq!(envelope.code.code(), "invalid_core");
    assert_eq!(envelope.metadata.get("input"), Some(&"1.0".to_string()));
    Ok(())
}

#[test]
fn declaration_json_drives_a_full_generation_pass() -> Result<(), serde_json::Error> {
    let declaration: VersionDeclaration =
        serde_json::from_str(r#"{ "major": 2, "minor": 5, "patch": 9, "project": "buildver" }"#)?;
    let artifact = VersionRecord::from_declaration_at(declaration, 99).freeze();

    assert_eq!(artifact.version_string(), "2.5.9");
    assert_eq!(artifact.project(), "buildver");
    assert_eq!(artifact.epoch_ms(), 99);
    Ok(())
}
