use axum::http::{HeaderMap, header};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::ApiError;

// Typed extraction helpers for request-supplied parameters. Each helper takes
// the raw string map the framework extracted and owns the conversion step, so
// handlers deal only in typed values and predicate checks.

/// required
///
/// Extracts a mandatory query parameter and converts it to `T` through its
/// `FromStr` implementation. Fails fast with [`ApiError::MissingParam`] when
/// the parameter is absent and [`ApiError::InvalidParam`] when conversion
/// rejects the raw string. The error message names the parameter, so the
/// caller's 400 response identifies exactly what to fix.
pub fn required<T>(query: &HashMap<String, String>, name: &'static str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = query.get(name).ok_or(ApiError::MissingParam(name))?;
    raw.parse::<T>()
        .map_err(|err| ApiError::InvalidParam(name, err.to_string()))
}

/// optional
///
/// Reads a query parameter that is allowed to be absent. No conversion and no
/// failure mode; absence is an ordinary `None`.
pub fn optional(query: &HashMap<String, String>, name: &str) -> Option<String> {
    query.get(name).cloned()
}

/// form_field
///
/// Reads a named field out of a urlencoded request body. Returns `Some` only
/// when the request declared `Content-Type: application/x-www-form-urlencoded`
/// (charset suffixes tolerated), the body parsed as a form, and the field was
/// present. Any other body shape reads as `None` rather than an error: a JSON
/// request simply has no form fields.
pub fn form_field(headers: &HeaderMap, body: &str, name: &str) -> Option<String> {
    let content_type = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
    if !content_type.starts_with("application/x-www-form-urlencoded") {
        return None;
    }

    let mut fields: HashMap<String, String> = serde_urlencoded::from_str(body).ok()?;
    fields.remove(name)
}
