//! Error types for preset assembly and cached state loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Error)]
pub enum PresetError {
    /// The cached build state has not been produced yet.
    #[error(
        "`fob-babel` consumes config generated by the Fob site build, but {} does not exist. \
         Set `NODE_ENV=test` to bypass, or run `fob build` first.",
        path.display()
    )]
    ConfigurationMissing { path: PathBuf },

    // Any other read or parse failure is surfaced untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to resolve '{specifier}' from {}: {reason}", from.display())]
    ResolutionFailed {
        specifier: String,
        from: PathBuf,
        reason: String,
    },
}

impl PresetError {
    /// Whether the user can fix this by running the upstream build step.
    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, PresetError::ConfigurationMissing { .. })
    }
}
