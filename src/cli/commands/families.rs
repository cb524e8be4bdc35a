//! The `families` command: show suitable font families for a text.

use serde_json::json;

use crate::cli::args::FamiliesArgs;
use crate::error::{FontScoutError, Result};
use crate::scout::Scout;
use crate::ui::UserInterface;

use super::{read_text, Command, CommandResult};

pub struct FamiliesCommand {
    scout: Scout,
    args: FamiliesArgs,
}

impl FamiliesCommand {
    pub fn new(scout: Scout, args: FamiliesArgs) -> Self {
        Self { scout, args }
    }
}

impl Command for FamiliesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let text = read_text(&self.args.text, &self.args.file)?;
        let info = self.scout.analyze(&text);

        let families = if self.args.all {
            self.scout.find_families(&info)?
        } else {
            self.scout.find_family(&info)?.into_iter().collect()
        };

        if families.is_empty() {
            return Err(FontScoutError::NoFontForScript {
                script: if info.main_script.is_empty() {
                    "(none)".to_string()
                } else {
                    info.main_script.clone()
                },
            });
        }

        let installed = self.scout.installed_families(&families);

        if self.args.json {
            let entries: Vec<_> = families
                .iter()
                .map(|name| {
                    json!({
                        "family": name,
                        "installed": installed.contains(name),
                    })
                })
                .collect();
            let value = json!({
                "main_script": info.main_script,
                "script_variant": info.script_variant,
                "families": entries,
            });
            ui.message(&serde_json::to_string_pretty(&value).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        for name in &families {
            if installed.contains(name) {
                ui.message(&format!("{} (installed)", name));
            } else {
                ui.message(name);
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DataCache;
    use crate::platform::InstalledFonts;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    const SAMPLE_JSON: &str = r#"{
        "arabic": {
            "families": {
                "Noto Naskh Arabic": {
                    "files": {
                        "hinted": ["fonts/NotoNaskhArabic/hinted/ttf/NotoNaskhArabic-Regular.ttf"]
                    }
                },
                "Noto Sans Arabic": {
                    "files": {
                        "hinted": ["fonts/NotoSansArabic/hinted/ttf/NotoSansArabic-Regular.ttf"]
                    }
                }
            }
        }
    }"#;

    fn scout(server: &MockServer, temp: &TempDir, installed: &[&str]) -> Scout {
        server.mock(|when, then| {
            when.method(GET).path("/noto.json");
            then.status(200).body(SAMPLE_JSON);
        });
        Scout::new()
            .with_data_cache(DataCache::with_options(
                temp.path(),
                server.url("/noto.json"),
            ))
            .with_installed_fonts(InstalledFonts::from_names(installed.iter().copied()))
    }

    #[test]
    fn preferred_family_only_by_default() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = FamiliesCommand::new(
            scout(&server, &temp, &[]),
            FamiliesArgs {
                text: Some("مرحبا".to_string()),
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.contains("Noto Naskh Arabic"));
        assert!(!ui.contains("Noto Sans Arabic"));
    }

    #[test]
    fn all_flag_lists_candidates_with_install_state() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = FamiliesCommand::new(
            scout(&server, &temp, &["Noto Sans Arabic"]),
            FamiliesArgs {
                text: Some("مرحبا".to_string()),
                all: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.contains("Noto Naskh Arabic"));
        assert!(ui.contains("Noto Sans Arabic (installed)"));
    }

    #[test]
    fn unknown_script_is_an_error() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = FamiliesCommand::new(
            scout(&server, &temp, &[]),
            FamiliesArgs {
                text: Some("ᚠᚢᚦ".to_string()), // Runic, not in the sample data
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, FontScoutError::NoFontForScript { .. }));
    }

    #[test]
    fn json_output_includes_script() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = FamiliesCommand::new(
            scout(&server, &temp, &[]),
            FamiliesArgs {
                text: Some("مرحبا".to_string()),
                json: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        let output = ui.output();
        assert!(output.contains("\"main_script\": \"Arabic\""));
        assert!(output.contains("\"installed\": false"));
    }
}
