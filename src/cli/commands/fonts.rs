//! The `fonts` command: show a family's installable files.

use crate::cli::args::FontsArgs;
use crate::error::{FontScoutError, Result};
use crate::scout::Scout;
use crate::ui::{Table, UserInterface};

use super::{Command, CommandResult};

pub struct FontsCommand {
    scout: Scout,
    args: FontsArgs,
}

impl FontsCommand {
    pub fn new(scout: Scout, args: FontsArgs) -> Self {
        Self { scout, args }
    }
}

impl Command for FontsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = self.scout.catalog()?;
        if !catalog.has_family(&self.args.family) {
            return Err(FontScoutError::UnknownFamily {
                family: self.args.family.clone(),
            });
        }

        let fonts = if self.args.all {
            catalog
                .for_families(&[self.args.family.clone()])
                .into_iter()
                .cloned()
                .collect()
        } else {
            self.scout.family_fonts(&self.args.family, None, None)?
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&fonts).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["POSTSCRIPT NAME", "SCRIPT", "WEIGHT", "STYLE", "BUILD", "FORMAT"]);
        for font in &fonts {
            table.add_row(vec![
                font.postscript_name.clone(),
                font.main_script.clone(),
                format!("{:?}", font.weight),
                format!("{:?}", font.style),
                format!("{:?}", font.build),
                format!("{:?}", font.format),
            ]);
        }
        ui.message(table.render().trim_end());
        ui.message(&format!("{} file(s)", fonts.len()));
        Ok(CommandResult::success())
    }
}
