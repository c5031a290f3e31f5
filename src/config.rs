use std::env;

/// AppConfig
///
/// Holds the application's entire configuration state. This struct is designed to be
/// immutable once loaded, ensuring consistency across all request handlers. It is
/// assembled once at startup and passed explicitly into the router construction;
/// nothing in the crate reads configuration from a global after boot.
#[derive(Clone)]
pub struct AppConfig {
    // Runtime environment marker. Controls the log output format.
    pub env: Env,
    // Socket address the HTTP server binds to, e.g. "0.0.0.0:7000".
    pub listen_addr: String,
}

/// Env
///
/// Defines the runtime context, used to switch between human-readable log output
/// for local development and JSON log output for production log aggregators.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for test setup.
    /// This allows tests to instantiate the configuration without touching process
    /// environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            listen_addr: "0.0.0.0:7000".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration at startup.
    /// Reads all parameters from environment variables, falling back to the defaults
    /// below when a variable is not set:
    ///
    /// - `APP_ENV`: "production" selects [`Env::Production`], anything else is local.
    /// - `LISTEN_ADDR`: bind address, defaults to "0.0.0.0:7000".
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:7000".to_string());

        Self { env, listen_addr }
    }
}
