//! Client configuration

use std::sync::Arc;

use crate::http::HttpClient;
use crate::session::{AuthEvents, SessionProvider};

/// Configuration for connecting to the backend API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, including the `/api` prefix
    /// (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(
        &self,
        session: Arc<dyn SessionProvider>,
        events: Arc<dyn AuthEvents>,
    ) -> HttpClient {
        HttpClient::new(self, session, events)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
