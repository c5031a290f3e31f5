use axum::routing::MethodRouter;

use crate::{AppState, auth::Role};

/// Router Module Index
///
/// Organizes the route table into access-segregated modules. Each module
/// contributes a list of [`RouteSpec`] entries; `registry()` concatenates them
/// into the single table from which **both** the axum router and the
/// [`crate::auth::AccessPolicy`] are derived. Declaring a route here is the
/// only way to expose it, and declaring it forces a permitted-role set, so a
/// route cannot exist without an access rule.

/// Routes reachable by every caller, with or without an `Authorization` header.
pub mod public;

/// Routes restricted to privileged callers. The access gate answers 401
/// "Unauthorized" for everyone else.
pub mod secured;

/// RouteSpec
///
/// One row of the route table: the path template the router registers, the
/// role set the access gate enforces for that template, and the handler
/// dispatched once the gate passes. The handler is a [`MethodRouter`], so the
/// method half of the registration lives inside it; requests for a registered
/// template with the wrong method are answered 405 by the framework, after
/// the gate has applied the template's role rule.
pub struct RouteSpec {
    pub path: &'static str,
    pub permitted: &'static [Role],
    pub handler: MethodRouter<AppState>,
}

impl RouteSpec {
    /// Row constructor for the GET-only table this service exposes.
    pub fn get(
        path: &'static str,
        permitted: &'static [Role],
        handler: MethodRouter<AppState>,
    ) -> Self {
        Self {
            path,
            permitted,
            handler,
        }
    }
}

/// registry
///
/// The complete route table, public tier first. Consumed once at startup by
/// `create_router`.
pub fn registry() -> Vec<RouteSpec> {
    let mut specs = public::public_routes();
    specs.extend(secured::secured_routes());
    specs
}
