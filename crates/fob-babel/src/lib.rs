//! Babel preset assembly for Fob site builds.
//!
//! Picks the presets and plugins that apply to a build stage (`develop`,
//! `build-html`, `build-javascript` or `test`) and the runtimes the output
//! must support, and emits them as a Babel-compatible configuration.
//!
//! # Example
//!
//! ```no_run
//! use fob_babel::{preset, PresetOptions};
//!
//! let config = preset(&PresetOptions::for_stage("build-javascript")).unwrap();
//! println!("{}", config.to_json_pretty().unwrap());
//! ```

pub mod builder;
pub mod cache;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod polyfills;
pub mod registry;
pub mod resolve;
pub mod stage;
pub mod targets;

pub use builder::{
    JSX_PRAGMA, PresetOptions, SKIPPED_ENV_TRANSFORMS, TargetsSource, build_config, preset,
    preset_in, resolve_stage, resolve_targets,
};
pub use cache::{CACHE_FILE, CacheLoader, CachedBuildState, load_cached_config};
pub use descriptor::*;
pub use env::{BuildEnv, STAGE_VAR, TEST_MODE_VARS};
pub use error::*;
pub use polyfills::POLYFILL_EXCLUDE_LIST;
pub use registry::{Transform, TransformKind};
pub use resolve::ModuleResolver;
pub use stage::BuildStage;
pub use targets::Targets;
