use serde::Serialize;

/// Crawl budget passed to Exa with every request, in milliseconds.
pub const DEFAULT_LIVECRAWL_TIMEOUT_MS: u64 = 10_000;

/// Request body for the Exa `/contents` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContentsRequest {
    pub urls: Vec<String>,
    pub summary: SummaryOptions,
    pub livecrawl_timeout: u64,
    pub text: bool,
}

/// Summary directive nested under `summary` in the request body.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOptions {
    pub query: String,
}

impl ContentsRequest {
    /// Builds a request asking Exa to live-crawl `urls` and answer `query`
    /// with a generated summary alongside the page text.
    pub fn new(urls: Vec<String>, query: impl Into<String>) -> Self {
        Self {
            urls,
            summary: SummaryOptions {
                query: query.into(),
            },
            livecrawl_timeout: DEFAULT_LIVECRAWL_TIMEOUT_MS,
            text: true,
        }
    }
}
