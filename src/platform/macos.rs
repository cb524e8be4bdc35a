//! macOS font installation via the user's Font Book directory.
//!
//! Copying into `~/Library/Fonts` is the supported way to install per-user
//! fonts; Core Text picks the directory up automatically, so there is no
//! post-install step.

use std::path::PathBuf;

use crate::catalog::FontInfo;
use crate::error::{FontScoutError, Result};

use super::FontPlatform;

/// Installs fonts into `~/Library/Fonts`.
#[derive(Debug)]
pub struct MacPlatform;

impl MacPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FontPlatform for MacPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn font_dir(&self) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| FontScoutError::UnsupportedPlatform {
            os: "macos without a home directory".to_string(),
        })?;
        Ok(home.join("Library").join("Fonts"))
    }

    fn install(&self, fonts: &[FontInfo]) -> Result<usize> {
        super::copy_fonts_into(&self.font_dir()?, fonts)
    }

    fn uninstall(&self, fonts: &[FontInfo]) -> Result<usize> {
        super::remove_fonts_from(&self.font_dir()?, fonts)
    }
}
