//! Client configuration.

use crate::domain::HomeTerminal;

/// Default base URL of the timetable website.
pub const DEFAULT_BASE_URL: &str = "http://www.ak-split.hr/";

/// Shared key the website's own forms send to the JSON API.
pub const DEFAULT_API_KEY: &str = "pass1pass2";

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the form pages and API paths are joined to
    pub base_url: String,
    /// Value of the `api-key` query parameter
    pub api_key: String,
    /// Station all timetables are relative to
    pub home_terminal: HomeTerminal,
}

impl ClientConfig {
    /// Create a config pointing at the live website.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            home_terminal: HomeTerminal::default(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set a different home terminal.
    pub fn with_home_terminal(mut self, home: HomeTerminal) -> Self {
        self.home_terminal = home;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
