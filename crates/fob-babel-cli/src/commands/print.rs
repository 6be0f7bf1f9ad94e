//! `fob-babel print`

use std::fs;
use std::path::Path;

use fob_babel::{BuildEnv, ModuleResolver, TransformConfiguration, preset_in};

use crate::cli::PrintArgs;
use crate::config::load_options;
use crate::error::Result;

use super::project_root;

pub fn execute(args: PrintArgs) -> Result<()> {
    let root = project_root(args.cwd.as_deref())?;
    let options = load_options(&args, &root)?;
    let env = BuildEnv::from_env();

    let config = preset_in(&root, &options, &env)?;
    let json = render(&config, args.resolve_from.as_deref())?;

    match args.out {
        Some(out) => {
            let out = root.join(out);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, format!("{json}\n"))?;
            tracing::info!(path = %out.display(), "wrote babel configuration");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Pretty JSON, with module ids resolved to paths when `resolve_from` is set.
pub fn render(config: &TransformConfiguration, resolve_from: Option<&Path>) -> Result<String> {
    match resolve_from {
        Some(dir) => {
            let resolver = ModuleResolver::new(dir);
            let value = config.to_resolved_json(&resolver)?;
            Ok(serde_json::to_string_pretty(&value)?)
        }
        None => Ok(config.to_json_pretty()?),
    }
}
