//! Shared building blocks for the kata workbook: the error type every
//! exercise returns, boundary parsing of raw input text, runtime
//! configuration, and the logging macros used across the workspace.

pub mod config;
pub mod error;
pub mod input;

mod macros;

// Re-exported so the logging macros resolve in every consumer.
pub use tracing;
