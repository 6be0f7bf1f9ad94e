//! `fob-babel check`

use console::style;
use fob_babel::{BuildEnv, CacheLoader, Targets};

use crate::cli::CheckArgs;
use crate::error::Result;

use super::project_root;

pub fn execute(args: CheckArgs) -> Result<()> {
    let root = project_root(args.cwd.as_deref())?;
    let env = BuildEnv::from_env();

    if env.test_mode {
        println!("{} test mode, cached build state bypassed", style("✓").green());
        return Ok(());
    }

    let loader = CacheLoader::new(&root);
    let state = loader.load(&env)?;

    println!(
        "{} {}",
        style("✓").green(),
        style(loader.path().display()).bold()
    );
    match state.browserslist {
        Some(targets) => println!("  targets: {}", describe(&targets)),
        None => println!("  targets: {}", style("none (preset-env defaults)").dim()),
    }
    Ok(())
}

fn describe(targets: &Targets) -> String {
    match targets {
        Targets::Query(query) => query.clone(),
        Targets::Queries(queries) => queries.join(", "),
        Targets::Environments(envs) => envs
            .iter()
            .map(|(env, version)| format!("{env} {version}"))
            .collect::<Vec<_>>()
            .join(", "),
        Targets::Other(value) => value.to_string(),
    }
}
