//! fob-babel CLI - inspect the Babel preset Fob applies to each build stage.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `print` and `check`
//! - [`config`] - Layered option loading
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - tracing setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
