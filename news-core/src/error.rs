use thiserror::Error;

/// Everything that can make a search fetch come back rejected. The
/// Display strings double as the user-facing error text held by the
/// session; nothing here ever crosses a command boundary as a panic.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("please enter a search keyword")]
    EmptyKeyword,
    #[error("the NEWS_API_KEY environment variable is not configured")]
    MissingCredential,
    #[error("upstream call failed: status {status}")]
    Transport { status: u16 },
    #[error("{0}")]
    Upstream(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("the search request timed out")]
    Timeout,
}
