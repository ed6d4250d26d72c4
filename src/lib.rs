/// Serverless endpoints that proxy the Exa content-summarization API and
/// return a normalized text summary.
///
/// This crate implements two Lambda entrypoints, one per invocation style:
/// 1. An HTTP Lambda serving `/helloWorld` and `/exaSummary` with plain
///    status-code + JSON responses
/// 2. A callable Lambda serving `helloCallable` and `exaSummaryCallable` as
///    structured RPC calls, signaling failure with a machine-readable error
///    kind instead of an HTTP status
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the single outbound call to the Exa `/contents` endpoint
/// - serde for the upstream wire types and response-shape probing
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use exa_summary::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() {
///     // Set up structured logging
///     exa_summary::setup_logging();
///
///     // Read process-wide configuration once, then thread it through
///     let config = AppConfig::from_env();
///
///     match exa_summary::summarize::fixed_target_summary(&config).await {
///         Ok(summary) => println!("Summary: {summary}"),
///         Err(e) => eprintln!("Error: {e}"),
///     }
/// }
/// ```
// Module declarations
pub mod api;
pub mod callable;
pub mod clients;
pub mod core;
pub mod errors;
pub mod extract;
pub mod summarize;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// exa_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
