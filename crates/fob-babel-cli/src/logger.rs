//! Logging setup for the fob-babel CLI.
//!
//! Logs go to stderr so `print` output on stdout stays valid JSON.
//!
//! The filter level is determined in this order:
//! 1. `--verbose` flag: DEBUG for fob-babel crates
//! 2. `--quiet` flag: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: INFO for fob-babel crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "fob_babel=debug,fob_babel_cli=debug";
const QUIET_FILTER: &str = "fob_babel=error,fob_babel_cli=error";
const DEFAULT_FILTER: &str = "fob_babel=info,fob_babel_cli=info";

/// Initialize the tracing subscriber. Call once, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
///
/// # Examples
///
/// ```rust,no_run
/// use fob_babel_cli::logger::init_logger;
///
/// // Debug logging, no colors (CI)
/// init_logger(true, false, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse() {
        for directive in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }
}
