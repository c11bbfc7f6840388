//! HTTP client for the remote users collection.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use common::{AppError, AppResult, HttpClientConfig};
use domain::{AgeCalculator, Clock, SystemClock, User};

use super::transport::{HttpTransport, ReqwestTransport};

/// Client wrapper for the users REST endpoint.
pub struct UserClient {
    transport: Arc<dyn HttpTransport>,
    url: String,
    clock: Arc<dyn Clock>,
}

impl UserClient {
    /// Create a client over an injected transport.
    pub fn new(transport: Arc<dyn HttpTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a client backed by reqwest using the given configuration.
    pub fn from_config(config: &HttpClientConfig) -> AppResult<Self> {
        reqwest::Url::parse(&config.endpoint)
            .map_err(|e| AppError::config(format!("Invalid users URL {}: {}", config.endpoint, e)))?;

        let transport = Arc::new(ReqwestTransport::new(config)?);
        Ok(Self::new(transport, config.endpoint.clone()))
    }

    /// Replace the clock used for age calculation.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Collection URL this client targets
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a user to the remote collection.
    pub async fn add_user(&self, user: &User) -> AppResult<()> {
        let body = serde_json::to_string(user)
            .map_err(|e| AppError::internal(format!("Failed to encode user: {}", e)))?;

        debug!("Adding user {} via {}", user.email, self.url);
        let response = self.transport.post_json(&self.url, body).await?;

        if !response.is_success() {
            warn!("Add user rejected with status {}", response.status);
            return Err(AppError::request(
                response.status,
                format!("Failed to add user: {}", response.status_text),
            ));
        }

        Ok(())
    }

    /// List all users.
    pub async fn get_users(&self) -> AppResult<Vec<User>> {
        debug!("Fetching users from {}", self.url);
        let response = self.transport.get(&self.url).await?;

        if !response.is_success() {
            warn!("Fetch users rejected with status {}", response.status);
            return Err(AppError::request(response.status, "Failed to fetch users"));
        }

        let users: Vec<User> = serde_json::from_slice(&response.body)?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// Age of someone born on `birth`, as of the client's clock.
    pub fn calculate_age(&self, birth: NaiveDate) -> AppResult<u32> {
        let calculator = AgeCalculator::new(Arc::clone(&self.clock));
        Ok(calculator.age_of(birth)?)
    }
}
