//! OS integration: installed-font discovery and font installation.
//!
//! This module provides:
//! - [`InstalledFonts`] - registry of families already on the system
//! - [`FontPlatform`] - per-OS install/uninstall behavior
//! - [`current`] - the platform implementation for the running OS

pub mod installed;
pub mod linux;
pub mod macos;
pub mod windows;

pub use installed::InstalledFonts;

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::FontInfo;
use crate::error::{FontScoutError, Result};

/// Per-OS font installation behavior.
///
/// All implementations install into the per-user font location; none of them
/// require elevation (except that an elevated Linux user gets the
/// system-wide directory).
pub trait FontPlatform: std::fmt::Debug {
    /// Short OS name for display.
    fn name(&self) -> &'static str;

    /// Directory font files are installed into.
    fn font_dir(&self) -> Result<PathBuf>;

    /// Install downloaded fonts. Returns how many files were copied.
    fn install(&self, fonts: &[FontInfo]) -> Result<usize>;

    /// Remove previously installed fonts by file name. Returns how many
    /// files were removed.
    fn uninstall(&self, fonts: &[FontInfo]) -> Result<usize>;

    /// Hook run after installation (e.g. rebuilding the fontconfig cache).
    fn post_install(&self) -> Result<()> {
        Ok(())
    }
}

/// The platform implementation for the running OS.
pub fn current() -> Result<Box<dyn FontPlatform>> {
    match std::env::consts::OS {
        "linux" => Ok(Box::new(linux::LinuxPlatform::new())),
        "macos" => Ok(Box::new(macos::MacPlatform::new())),
        "windows" => Ok(Box::new(windows::WindowsPlatform::new())),
        os => Err(FontScoutError::UnsupportedPlatform { os: os.to_string() }),
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Copy each downloaded font file into `dir`. Errors if a record was never
/// downloaded. Already-present files are overwritten.
pub(crate) fn copy_fonts_into(dir: &Path, fonts: &[FontInfo]) -> Result<usize> {
    fs::create_dir_all(dir)?;
    let mut copied = 0;
    for font in fonts {
        let source = font
            .path
            .as_ref()
            .ok_or_else(|| FontScoutError::NotDownloaded {
                postscript_name: font.postscript_name.clone(),
            })?;
        let target = dir.join(font.file_name());
        fs::copy(source, &target).map_err(|e| FontScoutError::InstallFailed {
            path: target.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!(file = %target.display(), "installed font file");
        copied += 1;
    }
    Ok(copied)
}

/// Remove each font's file from `dir` if present. Missing files are not an
/// error so uninstall stays idempotent.
pub(crate) fn remove_fonts_from(dir: &Path, fonts: &[FontInfo]) -> Result<usize> {
    let mut removed = 0;
    for font in fonts {
        let target = dir.join(font.file_name());
        if target.exists() {
            fs::remove_file(&target)?;
            tracing::debug!(file = %target.display(), "removed font file");
            removed += 1;
        }
    }
    Ok(removed)
}
