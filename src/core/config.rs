use std::env;

/// Process-wide configuration, read once per invocation by each Lambda
/// entrypoint and passed down by reference. Business logic never touches the
/// environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API key for the Exa summarization API. Absence is reported to the
    /// caller by the summary endpoints, not treated as a startup failure.
    pub exa_api_key: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            exa_api_key: env::var("EXA_API_KEY").ok(),
        }
    }
}
