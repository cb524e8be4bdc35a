//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// fontscout - Find and install fonts for the Unicode scripts used in a text.
#[derive(Debug, Parser)]
#[command(name = "fontscout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Prefer Hong Kong fonts for Traditional Chinese text
    #[arg(long, global = true)]
    pub prefer_hong_kong: bool,

    /// Directory for the cached font data file
    #[arg(long, global = true, env = "FONTSCOUT_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Alternate URL for the font data file (mirrors, tests)
    #[arg(long, global = true, env = "FONTSCOUT_NOTO_URL", value_name = "URL", hide = true)]
    pub noto_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text for the Unicode scripts it uses
    Analyze(AnalyzeArgs),

    /// Show the font families suitable for a text
    Families(FamiliesArgs),

    /// Show the font files that would be installed for a family
    Fonts(FontsArgs),

    /// Download and install fonts for a text or family
    Install(InstallArgs),

    /// Remove a previously installed font family
    Uninstall(UninstallArgs),

    /// List known families, scripts or installed fonts
    List(ListArgs),

    /// Refresh the cached font data file
    Refresh(RefreshArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Also show same-script runs
    #[arg(long)]
    pub runs: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `families` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FamiliesArgs {
    /// Text to find fonts for (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show all candidate families, not just the preferred one
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fonts` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FontsArgs {
    /// Font family name
    pub family: String,

    /// Show every known record of the family, not just the install selection
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Text to install fonts for (reads stdin when neither TEXT, --file nor --family is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Install a specific family instead of resolving one from text
    #[arg(long, value_name = "NAME", conflicts_with_all = ["text", "file"])]
    pub family: Option<String>,

    /// Pick the family interactively from all candidates
    #[arg(long, conflicts_with = "family")]
    pub choose: bool,

    /// Keep downloaded files in this directory instead of a temporary one
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Show what would be installed without downloading anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `uninstall` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UninstallArgs {
    /// Font family name
    pub family: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List known script/variant pairs instead of families
    #[arg(long)]
    pub scripts: bool,

    /// List font families installed on this system
    #[arg(long, conflicts_with = "scripts")]
    pub installed: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `refresh` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RefreshArgs {
    /// Re-download even if the server reports the data unchanged
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_parses_positional_text() {
        let cli = Cli::try_parse_from(["fontscout", "analyze", "hello"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => assert_eq!(args.text.as_deref(), Some("hello")),
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn install_family_conflicts_with_text() {
        let result =
            Cli::try_parse_from(["fontscout", "install", "text", "--family", "Noto Sans"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_scripts_conflicts_with_installed() {
        let result = Cli::try_parse_from(["fontscout", "list", "--scripts", "--installed"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fontscout", "analyze", "hi", "--debug"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn cache_dir_flag_parses() {
        let cli =
            Cli::try_parse_from(["fontscout", "refresh", "--cache-dir", "/tmp/cache"]).unwrap();
        assert_eq!(cli.cache_dir.as_deref(), Some(std::path::Path::new("/tmp/cache")));
    }
}
