//! Command implementations.

pub mod check;
pub mod print;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use check::execute as check_execute;
pub use print::execute as print_execute;

/// `--cwd` if given, otherwise the process working directory.
pub(crate) fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
