//! Loader contract tests for the mapping document.

use patcov::mapping::{load_mapping, MappingError};
use std::io::Write as _;
use tempfile::NamedTempFile;

fn write_mapping(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp mapping");
    file.write_all(json.as_bytes()).expect("write temp mapping");
    file
}

#[test]
fn load_preserves_entry_order_and_count() {
    let file = write_mapping(
        r#"{"value_patterns": [
            {"id": "github-pat", "regex": "ghp_[A-Za-z0-9]{36}"},
            {"id": "aws-access-key", "regex": "AKIA[0-9A-Z]{16}", "secret_group": 0},
            {"id": "slack-token", "regex": "xox[baprs]-[0-9A-Za-z-]+", "keywords": ["slack"]}
        ]}"#,
    );

    let mapping = load_mapping(file.path()).expect("mapping should load");
    let ids: Vec<&str> = mapping
        .value_patterns
        .iter()
        .map(|vp| vp.id.as_str())
        .collect();
    assert_eq!(ids, ["github-pat", "aws-access-key", "slack-token"]);
}

#[test]
fn defaults_applied_when_optional_fields_absent() {
    let file = write_mapping(r#"{"value_patterns": [{"id": "a", "regex": "x"}]}"#);

    let mapping = load_mapping(file.path()).expect("mapping should load");
    let vp = &mapping.value_patterns[0];
    assert_eq!(vp.secret_group, 0);
    assert!(vp.keywords.is_empty());
    assert!(vp.keyword.is_empty());
}

#[test]
fn missing_value_patterns_is_fatal() {
    let file = write_mapping(r#"{"schema_version": 3}"#);

    let err = load_mapping(file.path()).expect_err("load should fail");
    assert!(matches!(err, MappingError::Malformed(_)));
    assert!(err.to_string().contains("value_patterns"));
}

#[test]
fn entry_missing_regex_is_fatal() {
    let file = write_mapping(r#"{"value_patterns": [{"id": "a"}]}"#);

    let err = load_mapping(file.path()).expect_err("load should fail");
    assert!(matches!(err, MappingError::Malformed(_)));
    assert!(err.to_string().contains("regex"));
}

#[test]
fn entry_missing_id_is_fatal() {
    let file = write_mapping(r#"{"value_patterns": [{"regex": "x"}]}"#);

    let err = load_mapping(file.path()).expect_err("load should fail");
    assert!(err.to_string().contains("id"));
}

#[test]
fn duplicate_rule_ids_are_rejected() {
    let file = write_mapping(
        r#"{"value_patterns": [
            {"id": "dup", "regex": "a"},
            {"id": "dup", "regex": "b"}
        ]}"#,
    );

    let err = load_mapping(file.path()).expect_err("load should fail");
    assert!(matches!(err, MappingError::DuplicateRuleId(id) if id == "dup"));
}

#[test]
fn negative_secret_group_is_rejected() {
    let file = write_mapping(r#"{"value_patterns": [{"id": "a", "regex": "x", "secret_group": -1}]}"#);

    let err = load_mapping(file.path()).expect_err("load should fail");
    assert!(matches!(err, MappingError::Malformed(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_mapping(r#"{"value_patterns": [{"id": "a", "regex": "x", "severity": "HIGH"}]}"#);

    let err = load_mapping(file.path()).expect_err("load should fail");
    assert!(matches!(err, MappingError::Malformed(_)));
}

#[test]
fn missing_file_is_fatal() {
    let err = load_mapping(std::path::Path::new("does/not/exist.json")).expect_err("load should fail");
    assert!(matches!(err, MappingError::Io(_)));
}

#[test]
fn host_maps_are_exposed_for_fixture_generation() {
    let file = write_mapping(
        r#"{
            "schema_version": 3,
            "generated_at": "2026-01-01T00:00:00Z",
            "keyword_host_map": {"stripe": ["api.stripe.com"]},
            "exact_name_host_map": {"GITHUB_TOKEN": ["api.github.com"]},
            "value_patterns": [{"id": "a", "regex": "x"}]
        }"#,
    );

    let mapping = load_mapping(file.path()).expect("mapping should load");
    assert_eq!(mapping.schema_version, 3);
    assert_eq!(mapping.keyword_host_map["stripe"], ["api.stripe.com"]);
    assert_eq!(mapping.exact_name_host_map["GITHUB_TOKEN"], ["api.github.com"]);
}
