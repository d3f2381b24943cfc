//! # Sweepr Common
//!
//! Types shared by every crate in the workspace:
//!
//! * **[`probe`]**: addresses, probe outcomes and their classification.
//! * **[`error`]**: typed failures for loading input and probing hosts.
//! * **[`config`]**: runtime settings assembled by the CLI.
//!
//! The logging macros exported here forward to [`tracing`] with fixed targets,
//! so the terminal formatter can tell plain log lines apart from success lines.

pub mod config;
pub mod error;
pub mod probe;

pub use tracing;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sweepr::log", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sweepr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "sweepr::log", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "sweepr::log", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "sweepr::log", $($arg)*)
    };
}
