use std::time::Duration;

pub const DEFAULT_OAUTH_URL: &str = "https://oauth.ring.com/oauth/token";
pub const DEFAULT_API_URL: &str = "https://api.ring.com";
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const API_VERSION: u32 = 9;

/// Endpoint and transport settings for the account client.
///
/// Nothing here is persisted; the binary builds it from flags and the
/// `RINGDL_*` environment variables on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingConfig {
    pub oauth_url: String,
    pub api_url: String,
    /// History entries requested per page
    pub page_size: usize,
    /// Request timeout. `None` keeps the HTTP library default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            oauth_url: DEFAULT_OAUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            user_agent: format!("ringdl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RingConfig {
    pub fn with_oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = url.into();
        self
    }

    /// Sets the API base URL, dropping any trailing slash.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the page size. Zero would never page forward, so it is clamped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
