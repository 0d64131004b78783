//! CLI module for rollcall
//!
//! Parses flags, assembles configuration and boots the server.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{resolve_config, run, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
