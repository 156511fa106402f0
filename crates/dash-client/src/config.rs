//! Client configuration

/// Where the dashboard API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Default API location for local development.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3001/api";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `DASH_API_URL` from the environment, falling back to the local
    /// default.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("DASH_API_URL") {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
