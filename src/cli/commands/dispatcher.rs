//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::analysis::Analyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::scout::Scout;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the given UI.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cache_dir: Option<PathBuf>,
    noto_url: Option<String>,
    prefer_hong_kong: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher from the global CLI options.
    pub fn new(cli: &Cli) -> Self {
        Self {
            cache_dir: cli.cache_dir.clone(),
            noto_url: cli.noto_url.clone(),
            prefer_hong_kong: cli.prefer_hong_kong,
        }
    }

    /// Build a scout honoring the global overrides.
    fn scout(&self) -> Scout {
        Scout::new()
            .with_analyzer(Analyzer::new().with_hong_kong(self.prefer_hong_kong))
            .with_data_cache(Scout::data_cache(
                self.cache_dir.clone(),
                self.noto_url.clone(),
            ))
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Analyze(args) => {
                let cmd = super::analyze::AnalyzeCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::Families(args) => {
                let cmd = super::families::FamiliesCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::Fonts(args) => {
                let cmd = super::fonts::FontsCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::Uninstall(args) => {
                let cmd = super::uninstall::UninstallCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::Refresh(args) => {
                let cmd = super::refresh::RefreshCommand::new(self.scout(), args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
