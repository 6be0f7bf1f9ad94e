//! Resolve transform module ids to absolute paths.
//!
//! Babel resolves bare preset/plugin names relative to the config file. When the
//! configuration is handed to a host that runs from a different directory, ids
//! have to be pinned to the entry files installed next to the project instead.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::descriptor::{TransformConfiguration, TransformDescriptor};
use crate::error::{PresetError, Result};
use crate::registry::Transform;

#[derive(Debug)]
pub struct ModuleResolver {
    resolver: oxc_resolver::Resolver,
    from: PathBuf,
}

impl ModuleResolver {
    /// Resolve packages as Node's `require.resolve` would, starting at `from`.
    ///
    /// # Arguments
    ///
    /// * `from` - Directory whose `node_modules` chain is searched
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fob_babel::{ModuleResolver, Transform};
    ///
    /// let resolver = ModuleResolver::new("my-site");
    /// let path = resolver.resolve(Transform::PresetEnv).unwrap();
    /// println!("{}", path.display());
    /// ```
    pub fn new(from: impl AsRef<Path>) -> Self {
        let resolver = oxc_resolver::Resolver::new(oxc_resolver::ResolveOptions {
            condition_names: vec!["require".into(), "node".into(), "default".into()],
            extensions: vec![".js".into(), ".cjs".into(), ".json".into()],
            ..Default::default()
        });

        Self {
            resolver,
            from: from.as_ref().to_path_buf(),
        }
    }

    pub fn resolve(&self, transform: Transform) -> Result<PathBuf> {
        let specifier = transform.module_id();
        self.resolver
            .resolve(&self.from, specifier)
            .map(|res| res.path().to_path_buf())
            .map_err(|e| PresetError::ResolutionFailed {
                specifier: specifier.to_string(),
                from: self.from.clone(),
                reason: e.to_string(),
            })
    }

    fn resolve_item(&self, descriptor: &TransformDescriptor) -> Result<Value> {
        let path = self.resolve(descriptor.transform)?;
        tracing::trace!(
            specifier = descriptor.transform.module_id(),
            path = %path.display(),
            "resolved transform"
        );
        Ok(descriptor.to_json_as(&path.to_string_lossy())?)
    }
}

impl TransformConfiguration {
    /// Same shape as [`TransformConfiguration::to_json`], with every module id
    /// replaced by its resolved absolute path.
    pub fn to_resolved_json(&self, resolver: &ModuleResolver) -> Result<Value> {
        let presets = self
            .presets
            .iter()
            .map(|d| resolver.resolve_item(d))
            .collect::<Result<Vec<_>>>()?;
        let plugins = self
            .plugins
            .iter()
            .map(|d| resolver.resolve_item(d))
            .collect::<Result<Vec<_>>>()?;

        let mut config = Map::new();
        config.insert("presets".to_string(), Value::Array(presets));
        config.insert("plugins".to_string(), Value::Array(plugins));
        Ok(Value::Object(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn install(root: &Path, name: &str) -> PathBuf {
        let pkg = root.join("node_modules").join(name);
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join("package.json"),
            format!(r#"{{ "name": "{name}", "main": "lib/index.js" }}"#),
        )
        .unwrap();
        fs::create_dir_all(pkg.join("lib")).unwrap();
        let entry = pkg.join("lib/index.js");
        fs::write(&entry, "module.exports = {};").unwrap();
        entry
    }

    #[test]
    fn resolves_installed_package() {
        let dir = TempDir::new().unwrap();
        let entry = install(dir.path(), "babel-plugin-macros");

        let resolver = ModuleResolver::new(dir.path());
        let path = resolver.resolve(Transform::Macros).unwrap();
        assert_eq!(
            fs::canonicalize(path).unwrap(),
            fs::canonicalize(entry).unwrap()
        );
    }

    #[test]
    fn missing_package_is_resolution_failure() {
        let dir = TempDir::new().unwrap();
        let resolver = ModuleResolver::new(dir.path());
        let err = resolver.resolve(Transform::PresetEnv).unwrap_err();
        match err {
            PresetError::ResolutionFailed { specifier, .. } => {
                assert_eq!(specifier, "@babel/preset-env")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
