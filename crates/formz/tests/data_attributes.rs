//! Integration tests for data attribute generation
//!
//! Uses the registration form fixture together with a validation result
//! loaded from JSON, the way a rendering layer would.

use formz::{
    build_data_attributes, FieldError, FieldValue, FormConfiguration, FormValues, FormzContext,
    ValidationResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn registration() -> FormConfiguration {
    FormConfiguration::load(fixture("registration.toml")).unwrap()
}

fn submitted_result() -> ValidationResult {
    let content = std::fs::read_to_string(fixture("result.json")).unwrap();
    ValidationResult::from_json_str(&content).unwrap()
}

#[test]
fn test_full_attribute_set() {
    let form = registration();
    let result = submitted_result();
    let values = json!({
        "email": "ada@example.com",
        "newsletter": "1",
        "newsletterTopics": ["news", "events"],
        "phone_number": "0123"
    });

    let attributes = build_data_attributes(&values, &result, &form);

    let expected: BTreeMap<String, String> = [
        ("formz-error-email", "1"),
        ("formz-error-email-custom-rule", "1"),
        ("formz-error-email-default", "1"),
        ("formz-valid-newsletter", "1"),
        ("formz-valid-newsletter-topics", "1"),
        ("formz-value-email", "ada@example.com"),
        ("formz-value-newsletter", "1"),
        ("formz-value-newsletter-topics", "news events"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(attributes.into_inner(), expected);
}

#[test]
fn test_deactivated_field_never_referenced() {
    let form = registration();
    let mut result = submitted_result();
    result.add_error("phone_number", FieldError::with_title("required", "Missing."));
    let values = json!({ "phone_number": "0123" });

    let attributes = FormzContext::default().build_data_attributes(&values, &result, &form);

    assert!(attributes.iter().all(|(key, _)| !key.contains("phone-number")));
}

#[test]
fn test_caller_supplied_accessor() {
    struct Submitted;

    impl FormValues for Submitted {
        fn get(&self, field_name: &str) -> Option<FieldValue> {
            match field_name {
                "userEmail" => Some(vec!["a", "b"].into()),
                _ => None,
            }
        }
    }

    let form: FormConfiguration = FormConfiguration::from_json_str(
        r#"{ "name": "profile", "fields": [ { "name": "userEmail" }, { "name": "nickname" } ] }"#,
    )
    .unwrap();

    let attributes = build_data_attributes(&Submitted, &ValidationResult::new(), &form);

    assert_eq!(attributes.get("formz-value-user-email"), Some("a b"));
    assert_eq!(attributes.get("formz-value-nickname"), None);
    assert_eq!(attributes.get("formz-valid-nickname"), Some("1"));
}

#[test]
fn test_rendered_html() {
    let form = FormConfiguration::from_json_str(r#"{ "name": "search", "fields": [ { "name": "query" } ] }"#)
        .unwrap();
    let values = json!({ "query": "\"rust\" & <forms>" });

    let html = build_data_attributes(&values, &ValidationResult::new(), &form).render_html();

    assert_eq!(
        html,
        r#"data-formz-valid-query="1" data-formz-value-query="&quot;rust&quot; &amp; &lt;forms&gt;""#
    );
}
