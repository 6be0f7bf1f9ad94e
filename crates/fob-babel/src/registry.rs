//! Static registry of the presets and plugins the preset can emit.

use serde::{Serialize, Serializer};

/// Whether an entry goes in Babel's `presets` or `plugins` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Preset,
    Plugin,
}

/// A transform known to the preset, identified by its package name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    PresetEnv,
    PresetReact,
    OptimizeHookDestructuring,
    ClassProperties,
    NullishCoalescing,
    OptionalChaining,
    Macros,
    SyntaxDynamicImport,
    TransformRuntime,
    TransformSpread,
    DynamicImportNode,
    RemovePropTypes,
}

impl Transform {
    pub const ALL: [Transform; 12] = [
        Transform::PresetEnv,
        Transform::PresetReact,
        Transform::OptimizeHookDestructuring,
        Transform::ClassProperties,
        Transform::NullishCoalescing,
        Transform::OptionalChaining,
        Transform::Macros,
        Transform::SyntaxDynamicImport,
        Transform::TransformRuntime,
        Transform::TransformSpread,
        Transform::DynamicImportNode,
        Transform::RemovePropTypes,
    ];

    /// Module specifier Babel loads for this transform.
    pub const fn module_id(self) -> &'static str {
        match self {
            Transform::PresetEnv => "@babel/preset-env",
            Transform::PresetReact => "@babel/preset-react",
            Transform::OptimizeHookDestructuring => "babel-preset-fob/optimize-hook-destructuring",
            Transform::ClassProperties => "@babel/plugin-proposal-class-properties",
            Transform::NullishCoalescing => "@babel/plugin-proposal-nullish-coalescing-operator",
            Transform::OptionalChaining => "@babel/plugin-proposal-optional-chaining",
            Transform::Macros => "babel-plugin-macros",
            Transform::SyntaxDynamicImport => "@babel/plugin-syntax-dynamic-import",
            Transform::TransformRuntime => "@babel/plugin-transform-runtime",
            Transform::TransformSpread => "@babel/plugin-transform-spread",
            Transform::DynamicImportNode => "babel-plugin-dynamic-import-node",
            Transform::RemovePropTypes => "babel-plugin-transform-react-remove-prop-types",
        }
    }

    pub const fn kind(self) -> TransformKind {
        match self {
            Transform::PresetEnv | Transform::PresetReact => TransformKind::Preset,
            _ => TransformKind::Plugin,
        }
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.module_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn module_ids_are_unique() {
        let ids: HashSet<_> = Transform::ALL.iter().map(|t| t.module_id()).collect();
        assert_eq!(ids.len(), Transform::ALL.len());
    }

    #[test]
    fn only_env_and_react_are_presets() {
        let presets: Vec<_> = Transform::ALL
            .into_iter()
            .filter(|t| t.kind() == TransformKind::Preset)
            .collect();
        assert_eq!(presets, vec![Transform::PresetEnv, Transform::PresetReact]);
    }
}
