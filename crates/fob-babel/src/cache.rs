//! Cached build state written by the site build.
//!
//! The site build resolves the project's browserslist once and persists it to
//! `.cache/babelState.json`. Preset assembly reads it back instead of resolving
//! targets on every invocation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::env::BuildEnv;
use crate::error::{PresetError, Result};
use crate::targets::Targets;

/// Location of the cached state, relative to the project root.
pub const CACHE_FILE: &str = ".cache/babelState.json";

/// Persisted record produced by an earlier build step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedBuildState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browserslist: Option<Targets>,

    /// Anything else the build wrote, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CachedBuildState {
    pub fn with_browserslist(targets: impl Into<Targets>) -> Self {
        Self {
            browserslist: Some(targets.into()),
            extra: Map::new(),
        }
    }
}

/// Reads [`CachedBuildState`] from a project root.
///
/// Every call to [`CacheLoader::load`] re-reads the file; nothing is memoized.
#[derive(Debug, Clone)]
pub struct CacheLoader {
    root: PathBuf,
}

impl CacheLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Loader rooted at the process working directory.
    pub fn from_cwd() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(CACHE_FILE)
    }

    /// Load the cached state.
    ///
    /// In test mode this returns an empty record without touching the
    /// filesystem.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fob_babel::{BuildEnv, CacheLoader};
    ///
    /// let state = CacheLoader::new("my-site").load(&BuildEnv::from_env()).unwrap();
    /// println!("{:?}", state.browserslist);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `PresetError::ConfigurationMissing` if the file doesn't exist,
    /// and the underlying I/O or JSON error for any other failure.
    pub fn load(&self, env: &BuildEnv) -> Result<CachedBuildState> {
        if env.test_mode {
            tracing::debug!("test mode, skipping cached build state");
            return Ok(CachedBuildState::default());
        }

        let path = self.path();
        tracing::debug!(path = %path.display(), "reading cached build state");

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PresetError::ConfigurationMissing { path: path.clone() },
            _ => PresetError::Io(e),
        })?;

        Ok(serde_json::from_str(&content)?)
    }
}

/// Load the cached state from the current working directory.
///
/// # Errors
///
/// Same as [`CacheLoader::load`], plus a failure to read the working directory.
pub fn load_cached_config(env: &BuildEnv) -> Result<CachedBuildState> {
    if env.test_mode {
        return Ok(CachedBuildState::default());
    }
    CacheLoader::from_cwd()?.load(env)
}
