use demo_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the application, responsible for
/// initializing all core components: Configuration, Logging, and the HTTP
/// Server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Sets the default log level. It prioritizes the RUST_LOG environment variable,
    // falling back to sensible defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "demo_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    // The structured logging format is dynamically selected based on the APP_ENV.
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability during local debugging.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON format output for ingestion by centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. State Assembly and Router Construction
    // The loaded configuration is the whole of the shared state; the route
    // table and access policy are both derived inside create_router.
    let listen_addr = config.listen_addr.clone();
    let app = create_router(AppState { config });

    // 5. Server Startup
    let listener = TcpListener::bind(&listen_addr)
        .await
        .expect("FATAL: Failed to bind listen address. Check LISTEN_ADDR.");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on {}", listen_addr);
    tracing::info!("OpenAPI document available at: /api-docs/openapi.json");

    // The long-running Axum server process.
    axum::serve(listener, app).await.unwrap();
}
