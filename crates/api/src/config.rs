use axum::http::HeaderValue;
use teampicker_core::picker::DEFAULT_TEAMS;

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin (`CORS_ORIGINS=*`, the default).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins.
    pub cors: CorsPolicy,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Static team list for the in-memory picker service.
    pub picker_teams: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors: CorsPolicy::Any,
            request_timeout_secs: 30,
            picker_teams: DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `5000`                           |
    /// | `CORS_ORIGINS`         | `*`                              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `PICKER_TEAMS`         | `Team A,Team B,Team C,Team D`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => parse_number("PORT", "u16", &raw)?,
            None => defaults.port,
        };

        let cors = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_cors(&raw)?,
            None => defaults.cors,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_number("REQUEST_TIMEOUT_SECS", "u64", &raw)?,
            None => defaults.request_timeout_secs,
        };

        let picker_teams = match lookup("PICKER_TEAMS") {
            Some(raw) => split_list(&raw),
            None => defaults.picker_teams,
        };

        Ok(Self {
            host,
            port,
            cors,
            request_timeout_secs,
            picker_teams,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        expected,
        value: raw.to_string(),
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_cors(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let origins = split_list(raw);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(CorsPolicy::Any);
    }
    origins
        .into_iter()
        .map(|o| HeaderValue::from_str(&o).map_err(|_| ConfigError::InvalidCorsOrigin(o)))
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::List)
}
