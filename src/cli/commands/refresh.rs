//! The `refresh` command: revalidate the cached font data file.

use crate::catalog::RefreshOutcome;
use crate::cli::args::RefreshArgs;
use crate::error::Result;
use crate::scout::Scout;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

pub struct RefreshCommand {
    scout: Scout,
    args: RefreshArgs,
}

impl RefreshCommand {
    pub fn new(scout: Scout, args: RefreshArgs) -> Self {
        Self { scout, args }
    }
}

impl Command for RefreshCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cache = self.scout.cache();
        let mut spinner =
            ui.start_spinner(&format!("Refreshing font data from {}...", cache.url()));
        let outcome = cache.refresh(self.args.force);
        spinner.finish_and_clear();

        match outcome {
            Ok(RefreshOutcome::Updated { size_bytes }) => {
                ui.success(&format!("Font data updated ({} bytes)", size_bytes));
                Ok(CommandResult::success())
            }
            Ok(RefreshOutcome::NotModified) => {
                ui.success("Font data is already up to date");
                Ok(CommandResult::success())
            }
            Err(e) => Err(e),
        }
    }
}
