//! CLI command implementations.

pub mod analyze;
pub mod completions;
pub mod dispatcher;
pub mod families;
pub mod fonts;
pub mod install;
pub mod list;
pub mod refresh;
pub mod uninstall;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::io::Read;
use std::path::PathBuf;

use crate::error::Result;

/// Resolve the text input shared by `analyze`, `families` and `install`:
/// a positional argument, a file, or stdin.
pub(crate) fn read_text(text: &Option<String>, file: &Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.clone());
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
