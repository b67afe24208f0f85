use std::time::Duration;

/// Settings for talking to the upstream search API. The endpoint is a
/// field so tests can point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub page_size: u32,
    pub language: String,
    pub sort_by: String,
    pub request_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://newsapi.org/v2/everything".to_string(),
            api_key: None,
            page_size: 20,
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl SearchConfig {
    /// Defaults plus the credential from the process environment. A
    /// missing key is kept as None; it surfaces later as a rejected
    /// fetch, never as a startup crash.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }
}
