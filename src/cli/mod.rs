//! Command-line interface.
//!
//! This module provides:
//! - [`Cli`] and the argument structs (clap derive)
//! - [`CommandDispatcher`] routing subcommands to implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
