//! `refkit_log` v1:
//! Console logging setup shared by refkit binaries.
//!
//! Progress lines (`Copying ...`) and warnings (`No such command ...`) are
//! ordinary `tracing` events. At normal verbosity they are printed to stdout
//! as bare messages; verbose mode adds level tags and enables `debug`.

use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Console verbosity selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumLogVerbosity {
    /// Progress lines and warnings only.
    #[default]
    Normal,
    /// Also scope transitions, skipped paths and run summaries.
    Verbose,
}

impl EnumLogVerbosity {
    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(self) -> &'static str {
        match self {
            Self::Normal => "info",
            Self::Verbose => "debug",
        }
    }
}

/// Subscriber installation failure.
#[derive(Debug, Error)]
#[error("Failed to install console logger: {0}")]
pub struct LogInitError(String);

/// Build the event filter: `RUST_LOG` wins, otherwise the verbosity default.
pub fn build_env_filter(enum_verbosity: EnumLogVerbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(enum_verbosity.default_directive()))
}

/// Install the global console subscriber. Call once per process.
pub fn init_console_logging(enum_verbosity: EnumLogVerbosity) -> Result<(), LogInitError> {
    let if_verbose = enum_verbosity == EnumLogVerbosity::Verbose;
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(enum_verbosity))
        .with_writer(io::stdout)
        .without_time()
        .with_target(false)
        .with_level(if_verbose)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogInitError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::EnumLogVerbosity;

    #[test]
    fn default_directive_by_verbosity() {
        assert_eq!(EnumLogVerbosity::default(), EnumLogVerbosity::Normal);
        assert_eq!(EnumLogVerbosity::Normal.default_directive(), "info");
        assert_eq!(EnumLogVerbosity::Verbose.default_directive(), "debug");
    }
}
