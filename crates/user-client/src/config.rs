//! User client configuration.

use std::env;

use common::HttpClientConfig;

/// User client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserClientConfig {
    /// Users collection endpoint and timeouts
    pub http: HttpClientConfig,
}

impl UserClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            http: HttpClientConfig {
                endpoint: lookup("USER_API_URL").unwrap_or(defaults.endpoint),
                connect_timeout_ms: lookup("USER_API_CONNECT_TIMEOUT_MS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.connect_timeout_ms),
                request_timeout_ms: lookup("USER_API_REQUEST_TIMEOUT_MS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.request_timeout_ms),
            },
        }
    }

    /// Override the collection endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.http.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = UserClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, UserClientConfig::default());
        assert_eq!(config.http.endpoint, "http://localhost:3000/users");
    }

    #[test]
    fn test_reads_overrides() {
        let config = UserClientConfig::from_lookup(lookup_from(&[
            ("USER_API_URL", "http://api.internal:8080/users"),
            ("USER_API_CONNECT_TIMEOUT_MS", "250"),
            ("USER_API_REQUEST_TIMEOUT_MS", "1000"),
        ]));

        assert_eq!(config.http.endpoint, "http://api.internal:8080/users");
        assert_eq!(config.http.connect_timeout_ms, 250);
        assert_eq!(config.http.request_timeout_ms, 1000);
    }

    #[test]
    fn test_unparseable_timeouts_fall_back() {
        let config = UserClientConfig::from_lookup(lookup_from(&[
            ("USER_API_CONNECT_TIMEOUT_MS", "soon"),
            ("USER_API_REQUEST_TIMEOUT_MS", "-1"),
        ]));

        assert_eq!(config.http.connect_timeout_ms, 5000);
        assert_eq!(config.http.request_timeout_ms, 30000);
    }

    #[test]
    fn test_with_endpoint() {
        let config = UserClientConfig::default().with_endpoint("http://other/users");
        assert_eq!(config.http.endpoint, "http://other/users");
    }
}
