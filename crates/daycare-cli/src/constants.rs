//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells; clap uses it for usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, dataset file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "DAYCARE_LOG";
