//! Callable Lambda handler - structured RPC over direct invocation.
//!
//! The payload is a call envelope `{name, data}`. Success returns the
//! result value as-is; failure returns `{"error": {kind, message, detail?}}`
//! so callers get a machine-readable kind instead of an HTTP status code.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::FunctionError;
use crate::summarize;

pub use self::function_handler as handler;

/// Lambda handler for the callable entrypoint.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();
    info!("Callable Lambda received request: {:?}", event.payload);

    let name = event
        .payload
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    let data = event.payload.get("data").cloned().unwrap_or(Value::Null);

    Ok(dispatch(&config, name, &data).await)
}

/// Routes one call to its handler and marshals the outcome to the wire.
///
/// An already-structured [`FunctionError`] passes through unchanged; there
/// is no re-wrapping on the way out.
pub async fn dispatch(config: &AppConfig, name: &str, data: &Value) -> Value {
    let outcome = match name {
        "helloCallable" => Ok(json!({ "message": greeting(data) })),
        "exaSummaryCallable" => summary_call(config).await,
        other => Err(FunctionError::not_found(format!(
            "Unknown callable: {other}"
        ))),
    };

    match outcome {
        Ok(value) => value,
        Err(e) => {
            error!("Callable {} failed: {}", name, e);
            error_envelope(&e)
        }
    }
}

async fn summary_call(config: &AppConfig) -> Result<Value, FunctionError> {
    let summary = summarize::fixed_target_summary(config).await?;
    Ok(json!({ "summary": summary }))
}

fn greeting(data: &Value) -> String {
    let name = data
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("World");
    format!("Hello, {name}!")
}

fn error_envelope(error: &FunctionError) -> Value {
    let mut wire = json!({ "kind": error.kind, "message": error.message });
    if let Some(detail) = &error.detail {
        wire["detail"] = json!(detail);
    }
    json!({ "error": wire })
}
