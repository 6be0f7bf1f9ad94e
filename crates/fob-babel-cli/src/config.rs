//! Layered loading of preset options.
//!
//! Priority: CLI args > FOB_BABEL_* environment variables > options file > defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use fob_babel::{PresetOptions, Targets};

use crate::cli::PrintArgs;
use crate::error::{CliError, Result};

/// Options file looked up in the project root when `--config` isn't given.
pub const DEFAULT_OPTIONS_FILE: &str = "fob-babel.json";

pub const ENV_PREFIX: &str = "FOB_BABEL_";

/// Merge all option sources for `print`.
///
/// # Arguments
///
/// * `args` - Parsed `print` flags; `--stage` and `--targets` win over every layer
/// * `root` - Project root where `fob-babel.json` and relative `--config` paths live
///
/// # Errors
///
/// `CliError::FileNotFound` for a missing explicit `--config`, and
/// `CliError::Config` when the merged layers don't extract.
pub fn load_options(args: &PrintArgs, root: &Path) -> Result<PresetOptions> {
    let mut figment = Figment::new().merge(Serialized::defaults(PresetOptions::default()));

    if let Some(path) = options_file(args.config.as_deref(), root)? {
        tracing::debug!(path = %path.display(), "merging options file");
        figment = figment.merge(Json::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX));

    let mut options = figment
        .extract::<PresetOptions>()
        .map_err(|e| CliError::Config(e.to_string()))?;
    options.targets = options.targets.map(Targets::normalized);

    // Applied outside figment so target maps replace rather than merge
    let overrides = from_args(args);
    if overrides.targets.is_some() {
        options.targets = overrides.targets;
    }
    if overrides.stage.is_some() {
        options.stage = overrides.stage;
    }
    Ok(options)
}

/// Explicit `--config` must exist; the default file is optional.
fn options_file(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            if !path.exists() {
                return Err(CliError::FileNotFound(path));
            }
            Ok(Some(path))
        }
        None => {
            let default_path = root.join(DEFAULT_OPTIONS_FILE);
            Ok(default_path.exists().then_some(default_path))
        }
    }
}

fn from_args(args: &PrintArgs) -> PresetOptions {
    PresetOptions {
        targets: Targets::from_values(args.targets.iter().cloned()),
        stage: args.stage.clone().filter(|s| !s.is_empty()),
    }
}
