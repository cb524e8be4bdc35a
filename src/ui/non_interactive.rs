//! Plain UI for CI and non-TTY environments.

use crate::error::Result;

use super::spinner::ProgressSpinner;
use super::{OutputMode, UserInterface};

/// UI that never prompts: questions resolve to their defaults, selections to
/// the first item, and output is unstyled line-oriented text.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI for the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn quiet(&self) -> bool {
        self.mode == OutputMode::Quiet
    }
}

impl UserInterface for NonInteractiveUI {
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
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if !self.quiet() {
            eprintln!("warning: {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!(question, default, "auto-answering prompt");
        Ok(default)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        tracing::debug!(prompt, choices = items.len(), "auto-selecting first item");
        Ok(0)
    }

    fn start_spinner(&mut self, message: &str) -> ProgressSpinner {
        if !self.quiet() {
            println!("{}", message);
        }
        ProgressSpinner::hidden()
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
