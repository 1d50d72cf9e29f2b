//! Server configuration, read once at startup.

/// Runtime configuration.
///
/// Every value has a default suitable for local development; deployments
/// override through `ST_*` environment variables or a `.env` file next to
/// the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Directory served as the web frontend.
    pub static_dir: String,
    /// Allowed CORS origin; `*` keeps local development friction-free.
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env if present; the real environment wins.
        let _ = dotenvy::dotenv();

        Self {
            listen_addr: env_or("ST_LISTEN_ADDR", "127.0.0.1:8425"),
            db_path: env_or("ST_DB_PATH", "./data/spendtrack.db"),
            static_dir: env_or("ST_STATIC_DIR", "./static"),
            cors_origin: env_or("ST_CORS_ORIGIN", "*"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
