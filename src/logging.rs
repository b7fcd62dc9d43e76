//! Structured logging for the profile generator.
//!
//! Logs always go to stderr so stdout stays clean for archive reports and
//! robot-mode JSON.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Returns the default filter directive for the given verbosity flags.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "sdgen=error"
    } else {
        match verbose {
            0 => "sdgen=info",
            1 => "sdgen=debug",
            _ => "sdgen=trace",
        }
    }
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    /// JSON lines, for robot mode
    Json,
    /// Colored, for an interactive terminal
    Pretty,
    /// Compact without ANSI codes, for pipes and redirects
    Plain,
}

impl LogStyle {
    pub fn detect(robot_mode: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if io::stderr().is_terminal() {
            Self::Pretty
        } else {
            Self::Plain
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the verbosity flags (e.g. `sdgen=debug,zip=warn`).
/// Calling this twice is harmless; the first subscriber stays.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match LogStyle::detect(robot_mode) {
        LogStyle::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogStyle::Pretty => fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed(),
        LogStyle::Plain => fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .with_writer(io::stderr)
            .boxed(),
    };

    let _ = tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be set once per process, so only the
    // directive selection is checked here.

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0, false), "sdgen=info");
        assert_eq!(default_directive(1, false), "sdgen=debug");
        assert_eq!(default_directive(5, false), "sdgen=trace");
        assert_eq!(default_directive(2, true), "sdgen=error");
    }

    #[test]
    fn test_robot_mode_logs_json() {
        assert_eq!(LogStyle::detect(true), LogStyle::Json);
        assert_ne!(LogStyle::detect(false), LogStyle::Json);
    }

    #[test]
    fn test_filter_directives_parse() {
        for directive in ["sdgen=info", "sdgen=debug", "sdgen=trace", "sdgen=error"] {
            assert!(EnvFilter::try_new(directive).is_ok());
        }
        assert!(EnvFilter::try_new("sdgen=debug,zip=warn").is_ok());
    }
}
