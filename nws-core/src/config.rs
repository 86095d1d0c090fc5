use std::time::Duration;

use crate::Format;

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

pub const DEFAULT_USER_AGENT: &str = concat!("nws-rs/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration. Built once and owned by the [`crate::Client`];
/// only the user agent may change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Origin every endpoint path is appended to.
    pub base_url: String,

    /// api.weather.gov asks callers to identify themselves, ideally with a
    /// contact address, e.g. `"(myweatherapp.com, contact@myweatherapp.com)"`.
    pub user_agent: String,

    /// Sent as `Accept` unless a call asks for something else.
    pub default_format: Format,

    /// Applied to every transport call separately.
    pub timeout: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_format: Format::GeoJson,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Configuration {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
