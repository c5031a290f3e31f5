use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::routes::RouteSpec;

/// Role
///
/// The closed set of access levels a request can carry. A role is derived
/// fresh from the headers of every request and never persisted; comparison is
/// by value.
///
/// *Note*: `Admin` is granted on header **presence** alone. The content of the
/// `Authorization` header is never inspected, which makes this a demo policy
/// for exercising the access gate, not an authentication scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The unprivileged level every caller holds by default.
    Anyone,
    /// The privileged level, granted by supplying any `Authorization` header.
    Admin,
}

/// Permitted-role set for routes reachable by every caller.
pub const ANY_ROLE: &[Role] = &[Role::Anyone, Role::Admin];

/// Permitted-role set for routes restricted to privileged callers.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl Role {
    /// from_headers
    ///
    /// Resolves the caller's role from the request headers: an `Authorization`
    /// header present (with any value, including empty) yields [`Role::Admin`],
    /// its absence yields [`Role::Anyone`].
    pub fn from_headers(headers: &HeaderMap) -> Self {
        if headers.contains_key(header::AUTHORIZATION) {
            Role::Admin
        } else {
            Role::Anyone
        }
    }
}

/// AccessPolicy
///
/// The explicit registry of `path template -> permitted role set` consulted by
/// the access gate. It is derived from the same [`RouteSpec`] table the router
/// is built from, so a route cannot exist without a declared permitted set and
/// the two views cannot drift apart.
///
/// The template alone is the key: the gate runs after routing, and a request
/// reaching it with a template has at least matched the route tree. When its
/// method differs from the registered one, the gate applies the template's
/// role rule and forwards, and the framework's method router answers 405 — a
/// method mismatch is not an authorization failure.
///
/// Lookups that match no registered rule are denied. The only requests that
/// legitimately carry no rule are the ones that matched no route at all, and
/// those never reach a lookup (the gate forwards them to the 404 fallback).
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: Vec<(&'static str, &'static [Role])>,
}

impl AccessPolicy {
    /// from_specs
    ///
    /// Collects the `(path, permitted)` view of a route table. The handler
    /// halves of the specs are untouched; they stay with the router.
    pub fn from_specs(specs: &[RouteSpec]) -> Self {
        let rules = specs
            .iter()
            .map(|spec| (spec.path, spec.permitted))
            .collect();
        Self { rules }
    }

    /// permitted_for
    ///
    /// The role set declared for a path template, or `None` when no route was
    /// registered under it. The table is a handful of entries, so a linear
    /// scan is the whole lookup.
    pub fn permitted_for(&self, path: &str) -> Option<&'static [Role]> {
        self.rules
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, permitted)| *permitted)
    }

    /// permits
    ///
    /// Whether `role` may reach the routes registered under `path`. Unknown
    /// templates are denied.
    pub fn permits(&self, path: &str, role: Role) -> bool {
        self.permitted_for(path)
            .is_some_and(|permitted| permitted.contains(&role))
    }
}

/// access_gate
///
/// The single middleware function applied uniformly in front of every route.
///
/// *Mechanism*: routing has already happened by the time a layered middleware
/// runs, so the matched route template is available in the request extensions
/// as [`MatchedPath`]. The gate resolves the caller's [`Role`] from the
/// headers, looks the template up in the [`AccessPolicy`], and either forwards
/// the request or short-circuits with 401 and the literal body "Unauthorized".
/// Requests that matched no route carry no template and are forwarded
/// untouched, so the framework's 404 fallback stays reachable; requests that
/// matched the template but not the method are forwarded once the role rule
/// holds, so the framework's 405 stays reachable too.
///
/// Denials are not logged here beyond the status code the surrounding trace
/// layer records.
pub async fn access_gate(
    State(policy): State<Arc<AccessPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(matched) = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
    else {
        return next.run(request).await;
    };

    let role = Role::from_headers(request.headers());
    if policy.permits(&matched, role) {
        next.run(request).await
    } else {
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}
