//! Linux font installation via fontconfig directories.

use std::path::PathBuf;
use std::process::Command;

use crate::catalog::FontInfo;
use crate::error::{FontScoutError, Result};

use super::FontPlatform;

/// System-wide fontconfig directory used when running elevated.
const SYSTEM_FONT_DIR: &str = "/usr/local/share/fonts";

/// Installs fonts into the user's fontconfig font directory.
#[derive(Debug)]
pub struct LinuxPlatform;

impl LinuxPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinuxPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FontPlatform for LinuxPlatform {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn font_dir(&self) -> Result<PathBuf> {
        if super::is_elevated() {
            return Ok(PathBuf::from(SYSTEM_FONT_DIR).join("fontscout"));
        }
        let data_dir = dirs::data_dir().ok_or_else(|| FontScoutError::UnsupportedPlatform {
            os: "linux without XDG data directory".to_string(),
        })?;
        Ok(data_dir.join("fonts"))
    }

    fn install(&self, fonts: &[FontInfo]) -> Result<usize> {
        super::copy_fonts_into(&self.font_dir()?, fonts)
    }

    fn uninstall(&self, fonts: &[FontInfo]) -> Result<usize> {
        super::remove_fonts_from(&self.font_dir()?, fonts)
    }

    /// Rebuild the fontconfig cache so applications see the new fonts
    /// without restarting. Missing `fc-cache` is not fatal; fontconfig
    /// rescans on its own eventually.
    fn post_install(&self) -> Result<()> {
        match Command::new("fc-cache").arg("-f").output() {
            Ok(output) if output.status.success() => {
                tracing::debug!("fontconfig cache rebuilt");
            }
            Ok(output) => {
                tracing::warn!(
                    code = ?output.status.code(),
                    "fc-cache exited with an error"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "fc-cache not available");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_name() {
        assert_eq!(LinuxPlatform::new().name(), "linux");
    }

    #[test]
    fn font_dir_is_under_data_or_system() {
        if let Ok(dir) = LinuxPlatform::new().font_dir() {
            let dir = dir.to_string_lossy();
            assert!(dir.ends_with("fonts") || dir.contains("fontscout"));
        }
    }

    #[test]
    fn post_install_never_fails() {
        // Whether or not fc-cache exists on the test machine.
        assert!(LinuxPlatform::new().post_install().is_ok());
    }
}
