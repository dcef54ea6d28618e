//! Tracing subscriber initialization
//!
//! Logs go to stderr so they never mix with game output on stdout.
//!
//! # Priority (highest to lowest)
//!
//! 1. `NEONWORD_LOG` env var (per-target directives, e.g. `neonword=debug`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` → debug, `-q` → error)
//! 4. Default level: `warn`

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Project-specific filter variable
pub const LOG_ENV_VAR: &str = "NEONWORD_LOG";

/// Verbosity level derived from CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins when both flags are given
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber
///
/// Call once, early in `main`. A second call is ignored.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(verbosity, std::env::var(LOG_ENV_VAR).ok().as_deref());
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(verbosity == Verbosity::Verbose)
        .without_time()
        .compact();

    // try_init: an already installed subscriber is not an error here
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// `project` > `RUST_LOG` > verbosity default; unparseable directives fall through
fn build_env_filter(verbosity: Verbosity, project: Option<&str>) -> EnvFilter {
    if let Some(directives) = project
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.default_level();
    let directive = if verbosity == Verbosity::Verbose {
        format!("{level},neonword=debug")
    } else {
        level.to_string()
    };

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
    }

    #[test]
    fn default_level_mapping() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }

    #[test]
    fn project_directives_take_priority() {
        let filter = build_env_filter(Verbosity::Quiet, Some("neonword=trace"));
        assert!(filter.to_string().contains("neonword=trace"));
    }

    #[test]
    fn unparseable_directives_fall_through() {
        let _filter = build_env_filter(Verbosity::Normal, Some("=[{"));
        let _filter = build_env_filter(Verbosity::Verbose, None);
    }
}
