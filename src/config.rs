//! Process-wide configuration, loaded once at startup.
//!
//! The configuration is built in `main` and handed to the API gateway by
//! value; nothing in the crate reads the environment after startup.

use std::env;

/// Fallback key used when `API_KEY` is not set in the environment.
///
/// The service meters this shared key aggressively; set your own key for
/// anything beyond casual use.
const DEFAULT_API_KEY: &str = "3f2c9a81d6e44b7f9d0c5a1e8b4f7a62";

/// Base URL of the news service.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org";

/// Immutable settings shared by every request of one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Key sent as the `apiKey` query parameter.
    pub api_key: String,
    /// Base URL requests are issued against.
    pub endpoint: String,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `API_KEY` overrides the built-in default key; an empty value is
    /// treated the same as an unset one.
    pub fn from_env() -> Self {
        let api_key = env::var("API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        AppConfig {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
