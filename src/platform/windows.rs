//! Windows font installation via the per-user fonts directory and registry.
//!
//! Per-user fonts live under `%LOCALAPPDATA%\Microsoft\Windows\Fonts` and
//! must be referenced from the `HKCU\...\Fonts` registry key to be visible
//! to applications. The registry values are written with `reg.exe` so no
//! Win32 bindings are needed.

use std::path::PathBuf;
use std::process::Command;

use crate::catalog::{FontFormat, FontInfo};
use crate::error::{FontScoutError, Result};

use super::FontPlatform;

const FONTS_REGISTRY_KEY: &str =
    r"HKCU\Software\Microsoft\Windows NT\CurrentVersion\Fonts";

/// Installs fonts into the per-user Windows fonts directory.
#[derive(Debug)]
pub struct WindowsPlatform;

impl WindowsPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Registry value name for a font, e.g. "Noto Sans Bold (TrueType)".
    fn registry_value_name(font: &FontInfo) -> String {
        let kind = match font.format {
            FontFormat::Otf | FontFormat::Otc => "OpenType",
            _ => "TrueType",
        };
        if font.subfamily_name.is_empty() {
            format!("{} ({})", font.family_name, kind)
        } else {
            format!("{} {} ({})", font.family_name, font.subfamily_name, kind)
        }
    }

    fn register(&self, font: &FontInfo, file: &std::path::Path) -> Result<()> {
        let status = Command::new("reg")
            .args([
                "add",
                FONTS_REGISTRY_KEY,
                "/v",
                &Self::registry_value_name(font),
                "/t",
                "REG_SZ",
                "/d",
                &file.to_string_lossy(),
                "/f",
            ])
            .status()?;
        if !status.success() {
            return Err(FontScoutError::InstallFailed {
                path: file.to_path_buf(),
                message: format!("reg add exited with {:?}", status.code()),
            });
        }
        Ok(())
    }

    fn unregister(&self, font: &FontInfo) {
        // Best effort; the value may never have been written.
        let _ = Command::new("reg")
            .args([
                "delete",
                FONTS_REGISTRY_KEY,
                "/v",
                &Self::registry_value_name(font),
                "/f",
            ])
            .status();
    }
}

impl Default for WindowsPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FontPlatform for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn font_dir(&self) -> Result<PathBuf> {
        let local = dirs::data_local_dir().ok_or_else(|| FontScoutError::UnsupportedPlatform {
            os: "windows without a local app data directory".to_string(),
        })?;
        Ok(local.join("Microsoft").join("Windows").join("Fonts"))
    }

    fn install(&self, fonts: &[FontInfo]) -> Result<usize> {
        let dir = self.font_dir()?;
        let copied = super::copy_fonts_into(&dir, fonts)?;
        for font in fonts {
            self.register(font, &dir.join(font.file_name()))?;
        }
        Ok(copied)
    }

    fn uninstall(&self, fonts: &[FontInfo]) -> Result<usize> {
        for font in fonts {
            self.unregister(font);
        }
        super::remove_fonts_from(&self.font_dir()?, fonts)
    }
}
