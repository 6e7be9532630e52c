//! Client settings, with environment overrides.

use std::time::Duration;

/// Base URL of the hosted Opik API.
pub const DEFAULT_BASE_URL: &str = "https://www.comet.com/opik/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::Client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:5173/api`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Reads `OPIK_URL_OVERRIDE` and `OPIK_REQUEST_TIMEOUT_SECS`, falling
    /// back to the defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        let base_url = std::env::var("OPIK_URL_OVERRIDE")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: Duration::from_secs(env_u64("OPIK_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_hosted_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_u64_falls_back_on_garbage() {
        std::env::set_var("OPIK_TEST_ENV_U64_GARBAGE", "soon");
        assert_eq!(env_u64("OPIK_TEST_ENV_U64_GARBAGE", 7), 7);
        std::env::set_var("OPIK_TEST_ENV_U64_GARBAGE", " 12 ");
        assert_eq!(env_u64("OPIK_TEST_ENV_U64_GARBAGE", 7), 12);
        std::env::remove_var("OPIK_TEST_ENV_U64_GARBAGE");
        assert_eq!(env_u64("OPIK_TEST_ENV_U64_GARBAGE", 7), 7);
    }
}
