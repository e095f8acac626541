//! Logging macros used across the workspace.
//!
//! Thin wrappers over `tracing` with fixed targets so the CLI formatter
//! can pick a symbol and color per kind without parsing message text.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "kata::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "kata::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "kata::warn", $($arg)*)
    };
}
