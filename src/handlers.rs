use crate::{
    error::{ApiError, ErrorBody},
    models::{EchoResponse, Person, TimeIntervalResponse},
    params,
};
use axum::{
    Json,
    extract::{Path, Query},
    http::HeaderMap,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;

// --- Handlers ---

// Every handler is a stateless async function; nothing here touches shared
// state or blocks, so concurrent invocation is trivially safe. Role checks
// happen in the access gate before dispatch, never inside a handler.

/// index
///
/// [Public Route] Root greeting confirming the service is running.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service greeting", body = String))
)]
pub async fn index() -> &'static str {
    "Hello World! Service is running!"
}

/// hello_unsecured
///
/// [Public Route] Fixed greeting, reachable with or without an
/// `Authorization` header.
#[utoipa::path(
    get,
    path = "/un-secured",
    responses((status = 200, description = "Greeting", body = String))
)]
pub async fn hello_unsecured() -> &'static str {
    "Hello"
}

/// hello_secured
///
/// [Secured Route] The same greeting as `/un-secured`, gated behind the
/// privileged role. Callers without an `Authorization` header are answered
/// 401 "Unauthorized" by the access gate; this function never sees them.
#[utoipa::path(
    get,
    path = "/secured",
    responses(
        (status = 200, description = "Greeting", body = String),
        (status = 401, description = "No Authorization header supplied")
    )
)]
pub async fn hello_secured() -> &'static str {
    "Hello"
}

/// echo_params
///
/// [Public Route] The parameter-extraction exercise. Reads, in order:
///
/// - the `{path-param}` path segment,
/// - the optional `query-param` query value,
/// - the optional urlencoded `form-param` body field (only read when the
///   request declares a form content type),
/// - the raw body, hand-decoded as a [`Person`] document,
/// - the required integer `index` query parameter.
///
/// The decoded person is logged, and everything extracted is echoed back as
/// JSON. The first extraction or decode that fails aborts the request with a
/// structured 400.
///
/// *Note*: a form-encoded body yields the `form-param` field but cannot
/// simultaneously decode as the Person JSON document, so such requests fail
/// the body decode. The two body shapes are mutually exclusive by nature.
#[utoipa::path(
    get,
    path = "/test/{path-param}",
    params(
        ("path-param" = String, Path, description = "Arbitrary path segment, echoed back"),
        ("query-param" = Option<String>, Query, description = "Optional free-form query value"),
        ("index" = i32, Query, description = "Required integer query parameter")
    ),
    responses(
        (status = 200, description = "Echo of everything extracted", body = EchoResponse),
        (status = 400, description = "Missing/invalid parameter or undecodable body", body = ErrorBody)
    )
)]
pub async fn echo_params(
    Path(path_param): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<EchoResponse>, ApiError> {
    let query_param = params::optional(&query, "query-param");
    let form_param = params::form_field(&headers, &body, "form-param");

    let document: Value =
        serde_json::from_str(&body).map_err(|err| ApiError::MalformedBody(err.to_string()))?;
    let person = Person::from_json(&document)?;
    tracing::info!(person = %person, "decoded request body");

    let index: i32 = params::required(&query, "index")?;

    Ok(Json(EchoResponse {
        path_param,
        query_param,
        form_param,
        index,
        person: person.to_string(),
    }))
}

/// time_interval
///
/// [Public Route] Validates `from` and `to` as RFC 3339 timestamps and checks
/// that `to` is strictly after `from`. Responds with a summary of the interval
/// on success; any conversion or predicate failure is a structured 400 naming
/// the offending parameter or check.
#[utoipa::path(
    get,
    path = "/time-interval",
    params(
        ("from" = String, Query, description = "Interval start, RFC 3339"),
        ("to" = String, Query, description = "Interval end, RFC 3339, strictly after `from`")
    ),
    responses(
        (status = 200, description = "Validated interval", body = TimeIntervalResponse),
        (status = 400, description = "Missing/invalid timestamp or ordering violation", body = ErrorBody)
    )
)]
pub async fn time_interval(
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<TimeIntervalResponse>, ApiError> {
    let from: DateTime<Utc> = params::required(&query, "from")?;
    let to: DateTime<Utc> = params::required(&query, "to")?;

    if to <= from {
        return Err(ApiError::FailedCheck("'to' has to be after 'from'"));
    }

    Ok(Json(TimeIntervalResponse {
        from,
        to,
        duration_seconds: (to - from).num_seconds(),
    }))
}
