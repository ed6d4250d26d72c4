//! HTTP Lambda handler - thin router over the summary flow.
//!
//! Routes:
//! - `/helloWorld`: greeting probe, always 200
//! - `/exaSummary`: fetch-and-summarize against the fixed Exa target
//!
//! Both routes are method-agnostic and never read the request body.

use super::helpers;
use crate::core::config::AppConfig;
use crate::summarize;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

pub use self::function_handler as handler;

/// Lambda handler for the HTTP entrypoint.
///
/// Every outcome, including a malformed event, is reported as a well-formed
/// `{statusCode, body}` response value.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env();
    info!("HTTP Lambda received request: {:?}", event);

    let path_opt = event
        .payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| event.payload.get("path").and_then(|v| v.as_str()));

    let Some(path) = path_opt else {
        error!("Request missing path");
        return Ok(helpers::err_response(400, "Missing path"));
    };

    info!(raw_path = %path, "Request path");

    if path.ends_with("/helloWorld") {
        return Ok(helpers::ok_json(
            &json!({ "message": "Hello from Lambda!" }),
        ));
    }

    if path.ends_with("/exaSummary") {
        return Ok(handle_summary(&config).await);
    }

    Ok(helpers::err_response(404, &format!("No route for {path}")))
}

async fn handle_summary(config: &AppConfig) -> serde_json::Value {
    match summarize::fixed_target_summary(config).await {
        Ok(summary) => helpers::ok_json(&json!({ "summary": summary })),
        Err(e) => {
            error!("Summary request failed: {}", e);
            helpers::function_err_response(&e)
        }
    }
}
