// src/config.rs
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Fetch configuration for the URL extraction path.
///
/// The defaults present as a regular desktop browser.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_language: String,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::new();
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.user_agent.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_builders() {
        let config = ExtractorConfig::new()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent")
            .with_accept_language("fr-FR");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.accept_language, "fr-FR");
    }
}
