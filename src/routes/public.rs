use crate::{ApiDoc, auth::ANY_ROLE, handlers};
use axum::{Json, routing::get};
use utoipa::OpenApi;

use super::RouteSpec;

/// Public Route Table
///
/// Entries reachable by every caller. Supplying an `Authorization` header does
/// not lock a caller out of this tier: the permitted set is the full role set,
/// so promotion to `Admin` never costs access to a public route.
pub fn public_routes() -> Vec<RouteSpec> {
    vec![
        // GET /
        // Root greeting, confirming the service is up.
        RouteSpec::get("/", ANY_ROLE, get(handlers::index)),
        // GET /un-secured
        // The unprivileged counterpart of /secured. Returns the same greeting
        // for every caller, header or not.
        RouteSpec::get("/un-secured", ANY_ROLE, get(handlers::hello_unsecured)),
        // GET /test/{path-param}
        // Parameter-extraction exercise: path segment, query params, optional
        // urlencoded form field, and a hand-decoded Person body.
        RouteSpec::get("/test/{path-param}", ANY_ROLE, get(handlers::echo_params)),
        // GET /time-interval?from=...&to=...
        // Validated timestamp pair with an ordering predicate.
        RouteSpec::get("/time-interval", ANY_ROLE, get(handlers::time_interval)),
        // GET /health
        // A simple endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        RouteSpec::get("/health", ANY_ROLE, get(|| async { "ok" })),
        // GET /api-docs/openapi.json
        // The generated OpenAPI 3 document for everything in this table.
        RouteSpec::get(
            "/api-docs/openapi.json",
            ANY_ROLE,
            get(|| async { Json(ApiDoc::openapi()) }),
        ),
    ]
}
