//! The `list` command: known families, script pairs, or installed fonts.

use std::collections::BTreeMap;

use serde_json::json;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::scout::Scout;
use crate::ui::{Table, UserInterface};

use super::{Command, CommandResult};

pub struct ListCommand {
    scout: Scout,
    args: ListArgs,
}

impl ListCommand {
    pub fn new(scout: Scout, args: ListArgs) -> Self {
        Self { scout, args }
    }

    fn list_installed(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installed = self.scout.installed();
        if self.args.json {
            let families: Vec<&str> = installed.families().collect();
            ui.message(&serde_json::to_string_pretty(&families).unwrap_or_default());
            return Ok(CommandResult::success());
        }
        for family in installed.families() {
            ui.message(family);
        }
        ui.message(&format!("{} installed families", installed.len()));
        Ok(CommandResult::success())
    }

    fn list_scripts(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pairs = self.scout.catalog()?.known_script_variants();
        if self.args.json {
            let entries: Vec<_> = pairs
                .iter()
                .map(|(script, variant)| json!({ "script": script, "variant": variant }))
                .collect();
            ui.message(&serde_json::to_string_pretty(&entries).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["SCRIPT", "VARIANT"]);
        for (script, variant) in &pairs {
            table.add_row(vec![script.clone(), variant.clone()]);
        }
        ui.message(table.render().trim_end());
        ui.message(&format!("{} script/variant pairs", pairs.len()));
        Ok(CommandResult::success())
    }

    fn list_families(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = self.scout.catalog()?;

        // Family -> (distinct scripts, record count), in catalog order.
        let mut scripts_by_family: BTreeMap<String, (Vec<String>, usize)> = BTreeMap::new();
        for font in catalog.fonts() {
            let entry = scripts_by_family
                .entry(font.family_name.clone())
                .or_default();
            if !entry.0.contains(&font.main_script) {
                entry.0.push(font.main_script.clone());
            }
            entry.1 += 1;
        }

        if self.args.json {
            let entries: Vec<_> = scripts_by_family
                .iter()
                .map(|(family, (scripts, files))| {
                    json!({ "family": family, "scripts": scripts, "files": files })
                })
                .collect();
            ui.message(&serde_json::to_string_pretty(&entries).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["FAMILY", "SCRIPTS", "FILES"]);
        let families = scripts_by_family.len();
        for (family, (scripts, files)) in scripts_by_family {
            table.add_row(vec![family, scripts.join(", "), files.to_string()]);
        }
        ui.message(table.render().trim_end());
        ui.message(&format!("{} families", families));
        Ok(CommandResult::success())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.installed {
            self.list_installed(ui)
        } else if self.args.scripts {
            self.list_scripts(ui)
        } else {
            self.list_families(ui)
        }
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
        "latin-greek-cyrillic": {
            "families": {
                "Noto Sans": {
                    "files": {
                        "hinted": ["fonts/NotoSans/hinted/ttf/NotoSans-Regular.ttf"]
                    }
                }
            }
        }
    }"#;

    fn scout(server: &MockServer, temp: &TempDir) -> Scout {
        server.mock(|when, then| {
            when.method(GET).path("/noto.json");
            then.status(200).body(SAMPLE_JSON);
        });
        Scout::new()
            .with_data_cache(DataCache::with_options(
                temp.path(),
                server.url("/noto.json"),
            ))
            .with_installed_fonts(InstalledFonts::from_names(["DejaVu Sans"]))
    }

    #[test]
    fn default_lists_families_with_scripts() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(scout(&server, &temp), ListArgs::default());

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.contains("Noto Sans"));
        assert!(ui.contains("Latin, Greek, Cyrillic") || ui.contains("Cyrillic, Greek, Latin"));
        assert!(ui.contains("families"));
    }

    #[test]
    fn scripts_flag_lists_pairs() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(
            scout(&server, &temp),
            ListArgs {
                scripts: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.contains("SCRIPT"));
        assert!(ui.contains("zh-Hant"));
    }

    #[test]
    fn installed_flag_lists_system_fonts() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(
            scout(&server, &temp),
            ListArgs {
                installed: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        assert!(ui.contains("DejaVu Sans"));
        assert!(ui.contains("1 installed families"));
    }

    #[test]
    fn json_families_output_parses() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = ListCommand::new(
            scout(&server, &temp),
            ListArgs {
                json: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert!(parsed.as_array().unwrap().iter().any(|e| {
            e["family"] == "Noto Sans"
        }));
    }
}
