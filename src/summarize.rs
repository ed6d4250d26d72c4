//! Fetch-and-summarize flow shared by the HTTP and callable entrypoints.

use tracing::info;

use crate::clients::ExaClient;
use crate::core::config::AppConfig;
use crate::core::models::ContentsRequest;
use crate::errors::FunctionError;
use crate::extract::extract_summary;

/// The fixed page this deployment summarizes.
const TARGET_URLS: &[&str] = &[
    "https://www.google.com/maps/contrib/115444186411517945794/reviews/@41.4688643,-81.1138728,7z/data=!3m1!4b1!4m3!8m2!3m1!1e1?authuser=4&entry=ttu&g_ep=EgoyMDI1MDkwMy4wIKXMDSoASAFQAw%3D%3D",
];

const SUMMARY_QUERY: &str =
    "what food and places does he like? describe both food preferences and travel/place preferences";

/// Substituted when the upstream response yields no summary text.
pub const NO_SUMMARY_FALLBACK: &str = "No summary available.";

/// Runs the full flow: check the API key, call Exa for the fixed URL list,
/// and extract a summary from whatever shape comes back.
///
/// # Errors
///
/// Returns `failed-precondition` when the API key is absent (no upstream
/// call is made) and `internal` for any upstream failure.
pub async fn fixed_target_summary(config: &AppConfig) -> Result<String, FunctionError> {
    let Some(api_key) = config.exa_api_key.as_deref() else {
        return Err(FunctionError::failed_precondition(
            "Missing EXA_API_KEY environment variable",
        ));
    };

    let request = ContentsRequest::new(
        TARGET_URLS.iter().map(|s| (*s).to_string()).collect(),
        SUMMARY_QUERY,
    );

    let client = ExaClient::new(api_key.to_string());
    let response = client.fetch_contents(&request).await?;

    let summary = extract_summary(&response);
    if summary.is_empty() {
        info!("No summary found in Exa response, using fallback");
        return Ok(NO_SUMMARY_FALLBACK.to_string());
    }

    Ok(summary)
}
