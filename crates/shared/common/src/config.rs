//! Shared configuration structures.

use std::time::Duration;

use domain::DEFAULT_USERS_URL;
use serde::{Deserialize, Serialize};

/// HTTP client connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Collection endpoint URL (e.g., "http://localhost:3000/users")
    pub endpoint: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl HttpClientConfig {
    /// Connection timeout as a duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_USERS_URL.to_string(),
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_users_collection() {
        let config = HttpClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:3000/users");
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
