//! The `install` command: resolve, download and install fonts.

use crate::cli::args::InstallArgs;
use crate::download::Downloader;
use crate::error::{FontScoutError, Result};
use crate::platform;
use crate::scout::Scout;
use crate::ui::{OutputMode, UserInterface};

use super::{read_text, Command, CommandResult};

pub struct InstallCommand {
    scout: Scout,
    args: InstallArgs,
}

impl InstallCommand {
    pub fn new(scout: Scout, args: InstallArgs) -> Self {
        Self { scout, args }
    }

    /// Figure out which family to install: an explicit `--family`, an
    /// interactive pick from the candidates, or the preference rules.
    fn resolve_family(&self, ui: &mut dyn UserInterface) -> Result<String> {
        if let Some(family) = &self.args.family {
            if !self.scout.catalog()?.has_family(family) {
                return Err(FontScoutError::UnknownFamily {
                    family: family.clone(),
                });
            }
            return Ok(family.clone());
        }

        let text = read_text(&self.args.text, &self.args.file)?;
        let info = self.scout.analyze(&text);
        let script = if info.main_script.is_empty() {
            "(none)".to_string()
        } else {
            info.main_script.clone()
        };

        if self.args.choose && ui.is_interactive() {
            let candidates = self.scout.find_families(&info)?;
            if candidates.is_empty() {
                return Err(FontScoutError::NoFontForScript { script });
            }
            let index = ui.select("Font family to install", &candidates)?;
            return Ok(candidates[index].clone());
        }

        self.scout
            .find_family(&info)?
            .ok_or(FontScoutError::NoFontForScript { script })
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let family = self.resolve_family(ui)?;
        let families = vec![family.clone()];

        if self.scout.missing_families(&families).is_empty() {
            ui.success(&format!("{} is already installed, nothing to do", family));
            return Ok(CommandResult::success());
        }

        let fonts = self.scout.fonts_to_install(&families)?;
        if fonts.is_empty() {
            ui.warning(&format!("{} has no installable files", family));
            return Ok(CommandResult::success());
        }

        ui.message(&format!("{}:", family));
        for font in &fonts {
            ui.message(&format!("  {}", font.file_name()));
        }

        if self.args.dry_run {
            ui.success(&format!(
                "dry-run: {} file(s) would be installed",
                fonts.len()
            ));
            return Ok(CommandResult::success());
        }

        if !self.args.yes && !self.args.non_interactive && ui.is_interactive() {
            let question = format!("Install {} file(s) for {}?", fonts.len(), family);
            if !ui.confirm(&question, true)? {
                ui.message("Installation cancelled");
                return Ok(CommandResult::failure(1));
            }
        }

        let show_progress = ui.is_interactive() && ui.output_mode() != OutputMode::Quiet;
        let downloader = Downloader::new().with_progress(show_progress);
        let outcome = downloader.download(&fonts, self.args.dir.as_deref())?;
        tracing::debug!(
            files = outcome.fonts.len(),
            bytes = outcome.total_bytes(),
            "fonts downloaded"
        );

        let target = platform::current()?;
        let mut spinner = ui.start_spinner(&format!("Installing {}...", family));
        let installed = target.install(&outcome.fonts);
        spinner.finish_and_clear();

        let count = installed?;
        target.post_install()?;
        ui.success(&format!(
            "Installed {} file(s) to {}",
            count,
            target.font_dir()?.display()
        ));
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
    fn already_installed_family_is_a_no_op() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = InstallCommand::new(
            scout(&server, &temp, &["Noto Sans Cherokee"]),
            InstallArgs {
                family: Some("Noto Sans Cherokee".to_string()),
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.contains("already installed"));
    }

    #[test]
    fn dry_run_stops_before_downloading() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = InstallCommand::new(
            scout(&server, &temp, &[]),
            InstallArgs {
                family: Some("Noto Sans Cherokee".to_string()),
                dry_run: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.contains("dry-run"));
        assert!(ui.contains("NotoSansCherokee-Regular.ttf"));
    }

    #[test]
    fn declined_confirmation_cancels() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = InstallCommand::new(
            scout(&server, &temp, &[]),
            InstallArgs {
                family: Some("Noto Sans Cherokee".to_string()),
                ..Default::default()
            },
        );

        let mut ui = MockUI::new().with_confirm_answers(vec![false]);
        let result = cmd.execute(&mut ui).unwrap();
        assert!(!result.success);
        assert!(ui.contains("cancelled"));
    }

    #[test]
    fn unknown_family_is_an_error() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = InstallCommand::new(
            scout(&server, &temp, &[]),
            InstallArgs {
                family: Some("Noto Sans Nowhere".to_string()),
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, FontScoutError::UnknownFamily { .. }));
    }

    #[test]
    fn resolves_family_from_text() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = InstallCommand::new(
            scout(&server, &temp, &[]),
            InstallArgs {
                text: Some("ᏣᎳᎩ ᎦᏬᏂᎯᏍᏗ".to_string()),
                dry_run: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.contains("Noto Sans Cherokee"));
    }

    #[test]
    fn text_without_candidates_is_an_error() {
        let server = MockServer::start();
        let temp = TempDir::new().unwrap();
        let cmd = InstallCommand::new(
            scout(&server, &temp, &[]),
            InstallArgs {
                text: Some("hello".to_string()),
                dry_run: true,
                ..Default::default()
            },
        );

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, FontScoutError::NoFontForScript { .. }));
    }
}
