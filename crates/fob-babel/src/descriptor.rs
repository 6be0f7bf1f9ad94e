//! Typed preset/plugin descriptors and the assembled configuration.
//!
//! Descriptors serialize to Babel's item form: a bare module id when the
//! transform takes no options, `[id, options]` otherwise.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::registry::Transform;
use crate::targets::Targets;

/// `modules` option of `@babel/preset-env`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFormat {
    /// Rewrite ES modules to CommonJS (`"commonjs"`)
    CommonJs,
    /// Leave ES module syntax untouched (`false`)
    Preserve,
}

impl Serialize for ModuleFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ModuleFormat::CommonJs => serializer.serialize_str("commonjs"),
            ModuleFormat::Preserve => serializer.serialize_bool(false),
        }
    }
}

/// `useBuiltIns` strategy of `@babel/preset-env`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltIns {
    Usage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvPresetOptions {
    pub corejs: u8,
    pub loose: bool,
    pub modules: ModuleFormat,
    pub use_built_ins: BuiltIns,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Targets>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactPresetOptions {
    pub use_built_ins: bool,
    pub pragma: String,
    pub development: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HookDestructuringOptions {
    pub lib: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LooseOptions {
    pub loose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    pub corejs: bool,
    pub helpers: bool,
    pub regenerator: bool,
    #[serde(rename = "useESModules")]
    pub use_es_modules: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovePropTypesOptions {
    pub remove_import: bool,
}

/// Option bag attached to a transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransformOptions {
    None,
    Env(EnvPresetOptions),
    React(ReactPresetOptions),
    HookDestructuring(HookDestructuringOptions),
    Loose(LooseOptions),
    Runtime(RuntimeOptions),
    RemovePropTypes(RemovePropTypesOptions),
}

/// A single entry of the `presets` or `plugins` list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformDescriptor {
    pub transform: Transform,
    pub options: TransformOptions,
}

impl TransformDescriptor {
    pub fn new(transform: Transform, options: TransformOptions) -> Self {
        Self { transform, options }
    }

    /// Descriptor for a transform that takes no options.
    pub fn bare(transform: Transform) -> Self {
        Self::new(transform, TransformOptions::None)
    }

    pub fn has_options(&self) -> bool {
        !matches!(self.options, TransformOptions::None)
    }

    /// JSON item using `module` in place of the registry id.
    pub(crate) fn to_json_as(&self, module: &str) -> serde_json::Result<Value> {
        if self.has_options() {
            Ok(json!([module, serde_json::to_value(&self.options)?]))
        } else {
            Ok(Value::String(module.to_string()))
        }
    }
}

impl Serialize for TransformDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.has_options() {
            return self.transform.serialize(serializer);
        }
        let mut item = serializer.serialize_tuple(2)?;
        item.serialize_element(&self.transform)?;
        item.serialize_element(&self.options)?;
        item.end()
    }
}

/// Assembled Babel configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformConfiguration {
    pub presets: Vec<TransformDescriptor>,
    pub plugins: Vec<TransformDescriptor>,
}

impl TransformConfiguration {
    pub fn preset(&self, transform: Transform) -> Option<&TransformDescriptor> {
        self.presets.iter().find(|d| d.transform == transform)
    }

    pub fn plugin(&self, transform: Transform) -> Option<&TransformDescriptor> {
        self.plugins.iter().find(|d| d.transform == transform)
    }

    pub fn has_plugin(&self, transform: Transform) -> bool {
        self.plugin(transform).is_some()
    }

    /// Options of the `@babel/preset-env` entry.
    pub fn env_options(&self) -> Option<&EnvPresetOptions> {
        match self.preset(Transform::PresetEnv).map(|d| &d.options) {
            Some(TransformOptions::Env(options)) => Some(options),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
