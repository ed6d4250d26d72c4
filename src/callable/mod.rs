//! Callable Lambda handler and structured-error marshaling

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
