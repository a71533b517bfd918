//! Tests for loading compatibility dialect tables.

use vbcs_nullable::dialect::DEFAULT_COMPATIBILITY_NAMESPACE;
use vbcs_nullable::{CompatibilityDialect, DialectError, HelperMethod};

#[test]
fn test_default_dialect() {
    let dialect = CompatibilityDialect::default();
    assert_eq!(dialect.namespace, DEFAULT_COMPATIBILITY_NAMESPACE);
    assert_eq!(dialect.method_name(HelperMethod::ToBool), "ToBool");
    assert_eq!(
        dialect.method_name(HelperMethod::GreaterOrEqualTo),
        "GreaterOrEqualTo"
    );
    assert_eq!(
        dialect.method_name(HelperMethod::LesserOrEqualTo),
        "LesserOrEqualTo"
    );
    assert!(dialect.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    let dialect = CompatibilityDialect::from_json("{}").unwrap();
    assert_eq!(dialect, CompatibilityDialect::default());
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let dialect = CompatibilityDialect::from_json(
        r#"{ "helpers": { "lesserThan": "LessThan", "notEqualTo": "NotEquals" } }"#,
    )
    .unwrap();
    assert_eq!(dialect.namespace, DEFAULT_COMPATIBILITY_NAMESPACE);
    assert_eq!(dialect.method_name(HelperMethod::LesserThan), "LessThan");
    assert_eq!(dialect.method_name(HelperMethod::NotEqualTo), "NotEquals");
    assert_eq!(dialect.method_name(HelperMethod::EqualTo), "EqualTo");
}

#[test]
fn test_empty_namespace_rejected() {
    let err = CompatibilityDialect::from_json(r#"{ "namespace": "  " }"#).unwrap_err();
    assert!(matches!(err, DialectError::EmptyName { field: "namespace" }));
}

#[test]
fn test_empty_helper_name_rejected() {
    let err = CompatibilityDialect::from_json(r#"{ "helpers": { "toBool": "" } }"#).unwrap_err();
    assert!(matches!(
        err,
        DialectError::EmptyName {
            field: "helpers.toBool"
        }
    ));
    assert_eq!(
        err.to_string(),
        "compatibility dialect field `helpers.toBool` must not be empty"
    );
}

#[test]
fn test_malformed_json_rejected() {
    let err = CompatibilityDialect::from_json(r#"{ "namespace": 3 }"#).unwrap_err();
    assert!(matches!(err, DialectError::Parse(_)));
    assert!(
        err.to_string()
            .starts_with("invalid compatibility dialect:")
    );
}
