//! Mock UI recording output for unit tests.

use crate::error::Result;

use super::spinner::ProgressSpinner;
use super::{OutputMode, UserInterface};

/// Records every message and plays back scripted prompt answers.
#[derive(Default)]
pub struct MockUI {
    /// All messages, in order, prefixed with their kind.
    pub lines: Vec<String>,
    /// Answers returned by successive `confirm` calls; falls back to the
    /// prompt default when exhausted.
    pub confirm_answers: Vec<bool>,
    /// Index returned by `select` calls.
    pub select_answer: usize,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for confirmation prompts.
    pub fn with_confirm_answers(mut self, answers: Vec<bool>) -> Self {
        self.confirm_answers = answers;
        self
    }

    /// Whether any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// All recorded output joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("success: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {}", msg));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.lines.push(format!("confirm: {}", question));
        if self.confirm_answers.is_empty() {
            Ok(default)
        } else {
            Ok(self.confirm_answers.remove(0))
        }
    }

    fn select(&mut self, prompt: &str, _items: &[String]) -> Result<usize> {
        self.lines.push(format!("select: {}", prompt));
        Ok(self.select_answer)
    }

    fn start_spinner(&mut self, message: &str) -> ProgressSpinner {
        self.lines.push(format!("spinner: {}", message));
        ProgressSpinner::hidden()
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_order() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.success("two");
        ui.error("three");
        assert_eq!(ui.lines.len(), 3);
        assert!(ui.contains("success: two"));
        assert!(ui.output().contains("error: three"));
    }

    #[test]
    fn scripted_confirm_answers() {
        let mut ui = MockUI::new().with_confirm_answers(vec![false, true]);
        assert!(!ui.confirm("first?", true).unwrap());
        assert!(ui.confirm("second?", false).unwrap());
        // Exhausted: falls back to the default.
        assert!(ui.confirm("third?", true).unwrap());
    }

    #[test]
    fn select_returns_configured_index() {
        let mut ui = MockUI::new();
        ui.select_answer = 2;
        let items = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(ui.select("pick", &items).unwrap(), 2);
    }
}
