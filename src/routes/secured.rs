use crate::{auth::ADMIN_ONLY, handlers};
use axum::routing::get;

use super::RouteSpec;

/// Secured Route Table
///
/// Entries restricted to the privileged role. The access gate resolves the
/// caller's role from the `Authorization` header before any handler here runs
/// and short-circuits 401 "Unauthorized" when the role is not in the set, so
/// these handlers never observe an unprivileged request.
pub fn secured_routes() -> Vec<RouteSpec> {
    vec![
        // GET /secured
        // Same greeting as /un-secured, reachable only with an Authorization
        // header present.
        RouteSpec::get("/secured", ADMIN_ONLY, get(handlers::hello_secured)),
    ]
}
