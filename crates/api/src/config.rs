use wikifarm_core::listing::DEFAULT_MAX_RESULT_SIZE;

use crate::auth::jwt::JwtConfig;

/// Default domain wikis are hosted under.
pub const DEFAULT_HOSTING_DOMAIN: &str = "shoutwiki.com";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Domain appended to each wiki's subdomain in listing URLs.
    pub hosting_domain: String,
    /// Byte budget for a single listing response.
    pub max_result_size: usize,
    /// Verification settings for caller tokens.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `HOSTING_DOMAIN`       | `shoutwiki.com`            |
    /// | `API_MAX_RESULT_SIZE`  | `8388608`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let hosting_domain = std::env::var("HOSTING_DOMAIN")
            .map(|d| d.trim().trim_matches('.').to_string())
            .ok()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_HOSTING_DOMAIN.into());

        let max_result_size: usize = std::env::var("API_MAX_RESULT_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_RESULT_SIZE.to_string())
            .parse()
            .expect("API_MAX_RESULT_SIZE must be a valid usize");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            hosting_domain,
            max_result_size,
            jwt,
        }
    }
}
