//! Client configuration.

/// Registry endpoint configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the registry API (default: `http://localhost:3000`).
    pub base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `REGISTRY_API_URL`              | `http://localhost:3000` |
    /// | `REGISTRY_REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("REGISTRY_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let request_timeout_secs: u64 = std::env::var("REGISTRY_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REGISTRY_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}
