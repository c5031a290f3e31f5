use axum::{
    Router,
    extract::FromRef,
    http::{HeaderName, StatusCode},
    middleware,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;
use utoipa::OpenApi;

use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;

// Module for routing segregation (Public, Secured).
pub mod routes;
use auth::{AccessPolicy, access_gate};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation for the application. It aggregates
/// all API paths and data schemas decorated with the `#[utoipa::path]` and
/// `#[derive(utoipa::ToSchema)]` macros. The resulting JSON document is served
/// at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    // List all public handler functions here for documentation generation.
    paths(
        handlers::index, handlers::hello_unsecured, handlers::hello_secured,
        handlers::echo_params, handlers::time_interval
    ),
    // List all models (schemas) used in the request/response bodies.
    components(
        schemas(
            models::EchoResponse, models::TimeIntervalResponse, error::ErrorBody,
        )
    ),
    tags(
        (name = "demo-portal", description = "Role-gated HTTP demo API")
    )
)]
pub struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the application's
/// shared pieces. This service carries no repositories, clients, or caches;
/// the loaded configuration is the whole of its state, shared read-only
/// across all requests.
#[derive(Clone, Default)]
pub struct AppState {
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// Allows handlers to selectively pull the configuration out of the shared
// AppState instead of receiving the whole container.
impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's entire routing structure from the route table
/// in [`routes::registry`], applies global middleware, and registers the
/// application state.
pub fn create_router(state: AppState) -> Router {
    router_from_specs(routes::registry(), state)
}

/// router_from_specs
///
/// The table-to-router assembly behind [`create_router`], taking the route
/// table as an argument so tests can mount extra routes under the exact same
/// gate and layer stack.
///
/// The table is consumed twice: once to fold the handlers into the `Router`,
/// and once to derive the [`AccessPolicy`] the gate consults. Both views come
/// from the same table, so the router and the policy cannot drift apart.
pub fn router_from_specs(specs: Vec<routes::RouteSpec>, state: AppState) -> Router {
    // 1. Route Table -> Router + AccessPolicy
    let policy = Arc::new(AccessPolicy::from_specs(&specs));

    let router = specs
        .into_iter()
        .fold(Router::new(), |router, spec| {
            router.route(spec.path, spec.handler)
        })
        // 2. Access Gate: one middleware applied uniformly in front of every
        // route. Runs after routing, so the matched path template is available
        // for the policy lookup; unmatched requests pass through to the
        // framework 404 fallback.
        .layer(middleware::from_fn_with_state(policy, access_gate))
        // Apply the shared state to all routes.
        .with_state(state);

    // 3. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(AnyOrigin)
        .allow_origin(AnyOrigin)
        .allow_headers(AnyOrigin);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 4. Observability and Correlation Layers (Applied outermost/first)
    router
        .layer(
            ServiceBuilder::new()
                // 4a. Request ID Generation: Generates a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 4b. Request Tracing: Wraps the entire request/response lifecycle in a tracing span.
                // Uses the `trace_span_logger` to include the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 4c. Request ID Propagation: Ensures the generated x-request-id header is
                // returned to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id))
                // 4d. Catch-All Exception Handling: any panic escaping a
                // handler is logged and answered with a bare 500. Diagnostic
                // detail never reaches the caller.
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        // 5. CORS Layer (Applied last, allowing all traffic in/out after processing)
        .layer(cors)
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize the tracing span creation.
/// It extracts the `x-request-id` header (if present) and includes it in the
/// structured logging metadata alongside the HTTP method and URI.
///
/// *Goal*: Ensure every log line for a single request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    // The structured log format used by the tracing macros.
    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}

/// handle_panic
///
/// Response hook for the catch-panic layer. Downcasts the panic payload for
/// the log line and answers the caller with a plain 500; the payload itself is
/// only ever written to the logs.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else {
        "opaque panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
