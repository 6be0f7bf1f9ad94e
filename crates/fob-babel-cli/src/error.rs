//! CLI error types and their conversion to miette diagnostics.

use std::path::PathBuf;

use fob_babel::PresetError;
use miette::Report;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// Options could not be merged or extracted
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Preset(PresetError::ConfigurationMissing { path }) => miette::miette!(
            help = "Set `NODE_ENV=test` to bypass, or run `fob build` first",
            "cached build state not found: {}",
            path.display()
        ),
        CliError::Preset(PresetError::ResolutionFailed {
            specifier,
            from,
            reason,
        }) => miette::miette!(
            help = "Install the package in the project, or drop --resolve-from",
            "failed to resolve '{}' from {}: {}",
            specifier,
            from.display(),
            reason
        ),
        CliError::Config(msg) => miette::miette!(
            help = "Check fob-babel.json syntax and FOB_BABEL_* variables",
            "Configuration error: {}",
            msg
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn configuration_missing_keeps_guidance() {
        let err = CliError::from(PresetError::ConfigurationMissing {
            path: PathBuf::from(".cache/babelState.json"),
        });
        assert!(err.to_string().contains("NODE_ENV=test"));

        let report = cli_error_to_miette(err);
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("fob build"));
    }

    #[test]
    fn io_errors_pass_through() {
        let err = CliError::from(std::io::Error::other("disk on fire"));
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("disk on fire"));
    }
}
