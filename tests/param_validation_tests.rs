use axum::http::{HeaderMap, HeaderValue, header};
use chrono::{DateTime, TimeZone, Utc};
use demo_portal::{error::ApiError, params};
use std::collections::HashMap;

fn query_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn headers_with_content_type(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
    headers
}

// --- required ---

#[test]
fn test_required_converts_integers() {
    let query = query_of(&[("index", "42")]);
    let value: i32 = params::required(&query, "index").unwrap();
    assert_eq!(value, 42);
}

#[test]
fn test_required_converts_timestamps() {
    let query = query_of(&[("from", "2020-01-01T00:00:00Z")]);
    let value: DateTime<Utc> = params::required(&query, "from").unwrap();
    assert_eq!(value, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_required_fails_fast_on_absence() {
    let query = query_of(&[]);
    let err = params::required::<i32>(&query, "index").unwrap_err();
    assert_eq!(err, ApiError::MissingParam("index"));
    assert_eq!(
        err.to_string(),
        "missing required query parameter `index`"
    );
}

#[test]
fn test_required_names_parameter_on_conversion_failure() {
    let query = query_of(&[("index", "seven")]);
    let err = params::required::<i32>(&query, "index").unwrap_err();
    assert!(matches!(err, ApiError::InvalidParam("index", _)));
    assert!(err.to_string().contains("index"));
}

#[test]
fn test_required_rejects_malformed_timestamp() {
    let query = query_of(&[("from", "01/01/2020")]);
    let err = params::required::<DateTime<Utc>>(&query, "from").unwrap_err();
    assert!(matches!(err, ApiError::InvalidParam("from", _)));
}

// --- optional ---

#[test]
fn test_optional_reads_present_value() {
    let query = query_of(&[("query-param", "abc")]);
    assert_eq!(params::optional(&query, "query-param"), Some("abc".to_string()));
}

#[test]
fn test_optional_absence_is_not_an_error() {
    let query = query_of(&[]);
    assert_eq!(params::optional(&query, "query-param"), None);
}

// --- form_field ---

#[test]
fn test_form_field_reads_urlencoded_body() {
    let headers = headers_with_content_type("application/x-www-form-urlencoded");
    let body = "form-param=hello&other=ignored";
    assert_eq!(
        params::form_field(&headers, body, "form-param"),
        Some("hello".to_string())
    );
}

#[test]
fn test_form_field_decodes_percent_escapes() {
    let headers = headers_with_content_type("application/x-www-form-urlencoded");
    let body = "form-param=hello%20world";
    assert_eq!(
        params::form_field(&headers, body, "form-param"),
        Some("hello world".to_string())
    );
}

#[test]
fn test_form_field_tolerates_charset_suffix() {
    let headers =
        headers_with_content_type("application/x-www-form-urlencoded; charset=utf-8");
    assert_eq!(
        params::form_field(&headers, "form-param=x", "form-param"),
        Some("x".to_string())
    );
}

#[test]
fn test_form_field_gated_on_content_type() {
    // A JSON request simply has no form fields, even when its body would
    // parse as one.
    let headers = headers_with_content_type("application/json");
    assert_eq!(params::form_field(&headers, "form-param=x", "form-param"), None);

    let no_headers = HeaderMap::new();
    assert_eq!(
        params::form_field(&no_headers, "form-param=x", "form-param"),
        None
    );
}

#[test]
fn test_form_field_absent_field_reads_as_none() {
    let headers = headers_with_content_type("application/x-www-form-urlencoded");
    assert_eq!(params::form_field(&headers, "other=x", "form-param"), None);
}
