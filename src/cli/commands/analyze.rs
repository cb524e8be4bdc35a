//! The `analyze` command: show the scripts a text uses.

use serde_json::json;

use crate::analysis::script_runs;
use crate::cli::args::AnalyzeArgs;
use crate::error::Result;
use crate::scout::Scout;
use crate::ui::{Table, UserInterface};

use super::{read_text, Command, CommandResult};

pub struct AnalyzeCommand {
    scout: Scout,
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    pub fn new(scout: Scout, args: AnalyzeArgs) -> Self {
        Self { scout, args }
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let text = read_text(&self.args.text, &self.args.file)?;
        let info = self.scout.analyze(&text);
        let runs = self.args.runs.then(|| script_runs(&text));

        if self.args.json {
            let mut value = json!({
                "main_script": info.main_script,
                "script_variant": info.script_variant,
                "emoji_count": info.emoji_count,
                "script_counts": info.script_counts,
            });
            if let Some(runs) = &runs {
                value["runs"] = serde_json::to_value(runs).unwrap_or_default();
            }
            ui.message(&serde_json::to_string_pretty(&value).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        let main_script = if info.main_script.is_empty() {
            "(none)".to_string()
        } else {
            info.main_script.clone()
        };
        ui.message(&format!("Main script:    {}", main_script));
        if !info.script_variant.is_empty() {
            ui.message(&format!("Script variant: {}", info.script_variant));
        }
        ui.message(&format!("Emoji count:    {}", info.emoji_count));

        let mut counts: Vec<(&String, &usize)> = info.script_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        if !counts.is_empty() {
            ui.message("");
            let mut table = Table::new(&["SCRIPT", "CHARS"]);
            for (script, count) in counts {
                table.add_row(vec![script.clone(), count.to_string()]);
            }
            ui.message(table.render().trim_end());
        }

        if let Some(runs) = runs {
            ui.message("");
            let mut table = Table::new(&["RUN", "START", "END"]);
            for run in runs {
                table.add_row(vec![
                    run.script,
                    run.start.to_string(),
                    run.end.to_string(),
                ]);
            }
            ui.message(table.render().trim_end());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn run(args: AnalyzeArgs) -> (MockUI, CommandResult) {
        let mut ui = MockUI::new();
        let cmd = AnalyzeCommand::new(Scout::new(), args);
        let result = cmd.execute(&mut ui).unwrap();
        (ui, result)
    }

    #[test]
    fn reports_main_script() {
        let (ui, result) = run(AnalyzeArgs {
            text: Some("hello world".to_string()),
            ..Default::default()
        });
        assert!(result.success);
        assert!(ui.contains("Latin"));
    }

    #[test]
    fn json_output_has_fields() {
        let (ui, _) = run(AnalyzeArgs {
            text: Some("hello".to_string()),
            json: true,
            ..Default::default()
        });
        let output = ui.output();
        assert!(output.contains("\"main_script\": \"Latin\""));
        assert!(output.contains("\"emoji_count\": 0"));
    }

    #[test]
    fn runs_flag_adds_runs() {
        let (ui, _) = run(AnalyzeArgs {
            text: Some("abcдеж".to_string()),
            runs: true,
            ..Default::default()
        });
        assert!(ui.contains("Cyrillic"));
        assert!(ui.contains("RUN"));
    }

    #[test]
    fn empty_text_reports_none() {
        let (ui, result) = run(AnalyzeArgs {
            text: Some(String::new()),
            ..Default::default()
        });
        assert!(result.success);
        assert!(ui.contains("(none)"));
    }
}
