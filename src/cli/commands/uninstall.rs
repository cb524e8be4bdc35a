//! The `uninstall` command: remove a family's installed files.

use crate::cli::args::UninstallArgs;
use crate::error::{FontScoutError, Result};
use crate::platform;
use crate::scout::Scout;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

pub struct UninstallCommand {
    scout: Scout,
    args: UninstallArgs,
}

impl UninstallCommand {
    pub fn new(scout: Scout, args: UninstallArgs) -> Self {
        Self { scout, args }
    }
}

impl Command for UninstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.scout.catalog()?.has_family(&self.args.family) {
            return Err(FontScoutError::UnknownFamily {
                family: self.args.family.clone(),
            });
        }

        let fonts = self.scout.family_fonts(&self.args.family, None, None)?;
        if fonts.is_empty() {
            ui.warning(&format!("{} has no known files", self.args.family));
            return Ok(CommandResult::success());
        }

        if !self.args.yes && ui.is_interactive() {
            let question = format!(
                "Remove {} file(s) of {}?",
                fonts.len(),
                self.args.family
            );
            if !ui.confirm(&question, false)? {
                ui.message("Uninstall cancelled");
                return Ok(CommandResult::failure(1));
            }
        }

        let target = platform::current()?;
        let removed = target.uninstall(&fonts)?;
        target.post_install()?;

        if removed == 0 {
            ui.message(&format!(
                "No files of {} were found in {}",
                self.args.family,
                target.font_dir()?.display()
            ));
        } else {
            ui.success(&format!("Removed {} file(s)", removed));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DataCache;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    const SAMPLE_JSON: &str = r#"{
        "cherokee": {
            "families": {
                "Noto Sans Cherokee": {
                    "files": {
                        "hinted": ["fonts/NotoSansCherokee/hinted/ttf/NotoSansCherokee-Regular.ttf"]
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
        Scout::new().with_data_cache(DataCache::with_options(
            temp.path(),
            server.url("/noto.json"),
        ))
    }

    #[test]
    fn unknown_family_is_an_error() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = UninstallCommand::new(
            scout(&server, &temp),
            UninstallArgs {
                family: "Noto Sans Nowhere".to_string(),
                yes: true,
            },
        );

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, FontScoutError::UnknownFamily { .. }));
    }

    #[test]
    fn declined_confirmation_cancels() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = UninstallCommand::new(
            scout(&server, &temp),
            UninstallArgs {
                family: "Noto Sans Cherokee".to_string(),
                yes: false,
            },
        );

        let mut ui = MockUI::new().with_confirm_answers(vec![false]);
        let result = cmd.execute(&mut ui).unwrap();
        assert!(!result.success);
        assert!(ui.contains("cancelled"));
    }
}
