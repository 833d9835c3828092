//! Client configuration

use std::time::Duration;

/// Connection settings for a [`RosterClient`](crate::RosterClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Replace the default 30 second timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_override() {
        let config =
            ClientConfig::new("http://localhost:3000").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(ClientConfig::new("x").timeout, Duration::from_secs(30));
    }
}
