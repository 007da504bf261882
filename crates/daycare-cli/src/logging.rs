//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays clean for tables and JSON. The level
//! defaults to `warn`, `-v` raises it to `debug` and `-vv` to `trace`;
//! `DAYCARE_LOG` (an `EnvFilter` directive) wins over both.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: u8, color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(5), "trace");
    }
}
