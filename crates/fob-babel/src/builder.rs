//! Stage-driven assembly of the Babel configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheLoader, CachedBuildState};
use crate::descriptor::{
    BuiltIns, EnvPresetOptions, HookDestructuringOptions, LooseOptions, ModuleFormat,
    ReactPresetOptions, RemovePropTypesOptions, RuntimeOptions, TransformConfiguration,
    TransformDescriptor, TransformOptions,
};
use crate::env::BuildEnv;
use crate::error::Result;
use crate::polyfills::POLYFILL_EXCLUDE_LIST;
use crate::registry::Transform;
use crate::stage::BuildStage;
use crate::targets::Targets;

/// preset-env transforms skipped because they slow code down or are
/// handled by dedicated plugins further down the list.
pub const SKIPPED_ENV_TRANSFORMS: [&str; 4] = [
    "transform-typeof-symbol",
    "transform-spread",
    "proposal-nullish-coalescing-operator",
    "proposal-optional-chaining",
];

pub const JSX_PRAGMA: &str = "React.createElement";

/// Caller-supplied preset options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Targets>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl PresetOptions {
    pub fn for_stage(stage: impl Into<String>) -> Self {
        Self {
            targets: None,
            stage: Some(stage.into()),
        }
    }

    pub fn with_targets(mut self, targets: impl Into<Targets>) -> Self {
        self.targets = Some(targets.into());
        self
    }
}

/// Where the resolved targets came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetsSource {
    Explicit,
    CurrentRuntime,
    Cache,
}

/// Explicit option, then `FOB_BUILD_STAGE`, then `test`.
pub fn resolve_stage(options: &PresetOptions, env: &BuildEnv) -> BuildStage {
    options
        .stage
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(env.stage.as_deref())
        .map(BuildStage::from)
        .unwrap_or_default()
}

/// Exactly one source wins; explicit and cached targets are never merged.
pub fn resolve_targets(
    options: &PresetOptions,
    stage: &BuildStage,
    cached: &CachedBuildState,
) -> (Option<Targets>, TargetsSource) {
    if let Some(targets) = options.targets.as_ref().filter(|t| !t.is_empty()) {
        return (Some(targets.clone()), TargetsSource::Explicit);
    }
    if stage.targets_current_runtime() {
        return (Some(Targets::current_node()), TargetsSource::CurrentRuntime);
    }
    (cached.browserslist.clone(), TargetsSource::Cache)
}

/// Assemble the configuration from already-resolved inputs.
///
/// Pure: performs no I/O and reads no environment variables.
///
/// # Arguments
///
/// * `options` - Explicit targets and stage; either may be absent
/// * `env` - Test mode and stage override resolved from the environment
/// * `cached` - State persisted by the last site build
///
/// # Examples
///
/// ```
/// use fob_babel::{build_config, BuildEnv, CachedBuildState, PresetOptions, Transform};
///
/// let config = build_config(
///     &PresetOptions::for_stage("build-javascript"),
///     &BuildEnv::default(),
///     &CachedBuildState::with_browserslist(">0.25%"),
/// );
/// assert!(config.has_plugin(Transform::RemovePropTypes));
/// assert!(!config.has_plugin(Transform::DynamicImportNode));
/// ```
pub fn build_config(
    options: &PresetOptions,
    env: &BuildEnv,
    cached: &CachedBuildState,
) -> TransformConfiguration {
    let stage = resolve_stage(options, env);
    let (targets, source) = resolve_targets(options, &stage, cached);

    tracing::debug!(
        stage = %stage,
        test_mode = env.test_mode,
        targets_source = ?source,
        "assembling babel preset"
    );
    if targets.is_none() {
        tracing::debug!("no targets resolved, preset-env will use its defaults");
    }

    let presets = vec![env_preset(&stage, targets), react_preset(&stage)];
    let plugins = plugins(&stage, env);

    tracing::trace!(plugins = plugins.len(), "preset assembled");
    TransformConfiguration { presets, plugins }
}

/// Boundary entry point: reads the process environment and the cached state
/// from the working directory, then assembles the configuration.
///
/// # Errors
///
/// Whatever [`load_cached_config`](crate::cache::load_cached_config) raises;
/// assembly itself cannot fail.
///
/// # Examples
///
/// ```no_run
/// use fob_babel::{preset, PresetOptions};
///
/// // With NODE_ENV=test no cache file is needed
/// let config = preset(&PresetOptions::for_stage("test")).unwrap();
/// assert_eq!(config.presets.len(), 2);
/// ```
pub fn preset(options: &PresetOptions) -> Result<TransformConfiguration> {
    let env = BuildEnv::from_env();
    let cached = crate::cache::load_cached_config(&env)?;
    Ok(build_config(options, &env, &cached))
}

/// Same as [`preset`] with an explicit project root and environment.
///
/// # Arguments
///
/// * `root` - Project root containing `.cache/babelState.json`
/// * `options` - Explicit targets and stage
/// * `env` - Pre-resolved environment, see [`BuildEnv::from_env`]
///
/// # Examples
///
/// ```
/// use fob_babel::{preset_in, BuildEnv, PresetOptions};
///
/// // Test mode never reads the cache, so any root works
/// let config = preset_in(".", &PresetOptions::default(), &BuildEnv::test()).unwrap();
/// assert!(config.env_options().unwrap().targets.as_ref().unwrap().is_current_node());
/// ```
pub fn preset_in(
    root: impl AsRef<Path>,
    options: &PresetOptions,
    env: &BuildEnv,
) -> Result<TransformConfiguration> {
    let cached = CacheLoader::new(root).load(env)?;
    Ok(build_config(options, env, &cached))
}

fn env_preset(stage: &BuildStage, targets: Option<Targets>) -> TransformDescriptor {
    let exclude = SKIPPED_ENV_TRANSFORMS
        .iter()
        .chain(POLYFILL_EXCLUDE_LIST)
        .map(|id| id.to_string())
        .collect();

    TransformDescriptor::new(
        Transform::PresetEnv,
        TransformOptions::Env(EnvPresetOptions {
            corejs: 3,
            loose: true,
            modules: if *stage == BuildStage::Test {
                ModuleFormat::CommonJs
            } else {
                ModuleFormat::Preserve
            },
            use_built_ins: BuiltIns::Usage,
            targets,
            exclude,
        }),
    )
}

fn react_preset(stage: &BuildStage) -> TransformDescriptor {
    TransformDescriptor::new(
        Transform::PresetReact,
        TransformOptions::React(ReactPresetOptions {
            use_built_ins: true,
            pragma: JSX_PRAGMA.to_string(),
            development: *stage == BuildStage::Develop,
        }),
    )
}

fn plugins(stage: &BuildStage, env: &BuildEnv) -> Vec<TransformDescriptor> {
    let mut plugins = vec![
        TransformDescriptor::new(
            Transform::OptimizeHookDestructuring,
            TransformOptions::HookDestructuring(HookDestructuringOptions { lib: true }),
        ),
        TransformDescriptor::new(
            Transform::ClassProperties,
            TransformOptions::Loose(LooseOptions { loose: true }),
        ),
        TransformDescriptor::bare(Transform::NullishCoalescing),
        TransformDescriptor::bare(Transform::OptionalChaining),
        TransformDescriptor::bare(Transform::Macros),
        TransformDescriptor::bare(Transform::SyntaxDynamicImport),
        TransformDescriptor::new(
            Transform::TransformRuntime,
            TransformOptions::Runtime(RuntimeOptions {
                corejs: false,
                helpers: true,
                regenerator: true,
                use_es_modules: *stage != BuildStage::Test,
            }),
        ),
        // Loose spread drops holes and iterables in some inputs
        TransformDescriptor::new(
            Transform::TransformSpread,
            TransformOptions::Loose(LooseOptions { loose: false }),
        ),
    ];

    let conditional = [
        (
            env.test_mode,
            TransformDescriptor::bare(Transform::DynamicImportNode),
        ),
        (
            *stage == BuildStage::BuildJavascript,
            TransformDescriptor::new(
                Transform::RemovePropTypes,
                TransformOptions::RemovePropTypes(RemovePropTypesOptions {
                    remove_import: true,
                }),
            ),
        ),
    ];

    plugins.extend(
        conditional
            .into_iter()
            .filter_map(|(enabled, descriptor)| enabled.then_some(descriptor)),
    );
    plugins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_defaults_to_test() {
        let stage = resolve_stage(&PresetOptions::default(), &BuildEnv::default());
        assert_eq!(stage, BuildStage::Test);
    }

    #[test]
    fn explicit_stage_beats_environment() {
        let env = BuildEnv::default().with_stage("develop");
        let stage = resolve_stage(&PresetOptions::for_stage("build-html"), &env);
        assert_eq!(stage, BuildStage::BuildHtml);
    }

    #[test]
    fn environment_stage_used_when_option_empty() {
        let env = BuildEnv::default().with_stage("build-javascript");
        let stage = resolve_stage(&PresetOptions::for_stage(""), &env);
        assert_eq!(stage, BuildStage::BuildJavascript);
    }

    #[test]
    fn empty_explicit_targets_fall_through() {
        let options = PresetOptions::for_stage("develop").with_targets("");
        let cached = CachedBuildState::with_browserslist("ie 11");
        let (targets, source) = resolve_targets(&options, &BuildStage::Develop, &cached);
        assert_eq!(source, TargetsSource::Cache);
        assert_eq!(targets, Some(Targets::from("ie 11")));
    }

    #[test]
    fn unconditional_plugins_only() {
        let config = build_config(
            &PresetOptions::for_stage("develop"),
            &BuildEnv::default(),
            &CachedBuildState::default(),
        );
        assert_eq!(config.plugins.len(), 8);
    }
}
