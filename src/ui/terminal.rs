//! Interactive terminal UI.

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::Result;

use super::spinner::ProgressSpinner;
use super::theme::{should_use_colors, Theme};
use super::{OutputMode, UserInterface};

/// UI for interactive terminal sessions: styled output, real prompts and
/// spinners.
pub struct TerminalUI {
    mode: OutputMode,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI for the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { mode, theme }
    }

    fn quiet(&self) -> bool {
        self.mode == OutputMode::Quiet
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if !self.quiet() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if !self.quiet() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if !self.quiet() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default)
            .interact()
            .context("confirmation prompt failed")?;
        Ok(answer)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .context("selection prompt failed")?;
        Ok(index)
    }

    fn start_spinner(&mut self, message: &str) -> ProgressSpinner {
        if self.quiet() {
            ProgressSpinner::hidden()
        } else {
            ProgressSpinner::new(message)
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
