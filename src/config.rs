//! Client configuration: API key and base-URL resolution.

use std::env;

/// Default service endpoint, used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.docparse.io";

/// Environment variable carrying the API key.
pub const API_KEY_ENV: &str = "DOCPARSE_API_KEY";

/// Environment variable carrying the base URL.
pub const BASE_URL_ENV: &str = "DOCPARSE_BASE_URL";

/// Resolved connection settings for the artifact endpoints.
///
/// Precedence per field: explicit argument, then environment variable,
/// then (base URL only) [`DEFAULT_BASE_URL`]. A missing API key is
/// accepted here; the first authenticated call will fail instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bearer token for the `Authorization` header, if configured
    pub api_key: Option<String>,

    /// Base URL of the service
    pub base_url: String,
}

impl Config {
    /// Resolve configuration from explicit overrides and the process
    /// environment.
    pub fn resolve(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self::resolve_with(api_key, base_url, |name| env::var(name).ok())
    }

    /// Resolve configuration with an injected environment reader.
    ///
    /// Empty-string values count as unset, whether explicit or from the
    /// environment.
    pub fn resolve_with<E>(api_key: Option<String>, base_url: Option<String>, env: E) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(api_key).or_else(|| non_empty(env(API_KEY_ENV)));
        let base_url = non_empty(base_url)
            .or_else(|| non_empty(env(BASE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
