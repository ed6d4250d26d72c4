//! Response builders for the HTTP entrypoint.
//!
//! Every route outcome becomes a proxy-style `{statusCode, body}` value
//! with a JSON-encoded body string.

use serde_json::{Value, json};

use crate::errors::FunctionError;

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({ "statusCode": 200, "body": body.to_string() })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a handler error to a 500 response, attaching upstream body text
/// under `details` when present.
#[must_use]
pub fn function_err_response(error: &FunctionError) -> Value {
    let mut body = json!({ "error": error.message });
    if let Some(detail) = &error.detail {
        body["details"] = json!(detail);
    }
    json!({ "statusCode": 500, "body": body.to_string() })
}
