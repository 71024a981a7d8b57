pub mod app_config;
pub mod catalog_config;
pub mod cors_config;
pub mod database_config;
pub mod openai_config;
pub mod recommendation_config;
pub mod server_config;

use std::str::FromStr;

/// Reads `key` from the environment, falling back to `default` when the
/// variable is unset, empty or unparsable.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Non-empty string variable, if set.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
