//! HTTP download of font files.
//!
//! Downloads are streamed straight to disk. When no target directory is
//! given, files land in a temporary directory whose guard is handed back to
//! the caller so it outlives the subsequent install step.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tempfile::TempDir;

use crate::catalog::FontInfo;
use crate::error::{FontScoutError, Result};

/// Result of downloading a set of fonts.
#[derive(Debug)]
pub struct DownloadOutcome {
    /// The input records with `path` set to the downloaded file.
    pub fonts: Vec<FontInfo>,
    /// Guard for the temporary directory, when one was created. Dropping it
    /// deletes the downloaded files.
    pub temp_dir: Option<TempDir>,
}

impl DownloadOutcome {
    /// Total size of the downloaded files in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.fonts
            .iter()
            .filter_map(|f| f.path.as_ref())
            .filter_map(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .sum()
    }
}

/// Downloads font files over HTTP.
pub struct Downloader {
    client: reqwest::blocking::Client,
    show_progress: bool,
}

impl Downloader {
    /// Downloader with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Downloader with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent(concat!("fontscout/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            show_progress: false,
        }
    }

    /// Show a per-file progress bar while downloading.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Download every record with a URL into `dir` (or a fresh temporary
    /// directory). Records with an empty URL are passed through untouched.
    pub fn download(&self, fonts: &[FontInfo], dir: Option<&Path>) -> Result<DownloadOutcome> {
        let (target, temp_dir): (PathBuf, Option<TempDir>) = match dir {
            Some(dir) => (dir.to_path_buf(), None),
            None => {
                let temp = tempfile::Builder::new().prefix("fontscout-").tempdir()?;
                (temp.path().to_path_buf(), Some(temp))
            }
        };
        std::fs::create_dir_all(&target)?;

        let mut downloaded = Vec::with_capacity(fonts.len());
        for font in fonts {
            let mut font = font.clone();
            if !font.url.is_empty() {
                let path = target.join(font.file_name());
                self.fetch_to(&font.url, &path)?;
                font.path = Some(path);
            }
            downloaded.push(font);
        }

        Ok(DownloadOutcome {
            fonts: downloaded,
            temp_dir,
        })
    }

    fn fetch_to(&self, url: &str, path: &Path) -> Result<()> {
        tracing::debug!(url, target = %path.display(), "downloading font");
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(FontScoutError::DownloadFailed {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let bar = if self.show_progress {
            let bar = match response.content_length() {
                Some(len) => ProgressBar::new(len).with_style(
                    ProgressStyle::default_bar()
                        .template("  {msg} {bar:30.magenta} {bytes}/{total_bytes}")
                        .unwrap()
                        .progress_chars("=> "),
                ),
                None => ProgressBar::new_spinner(),
            };
            bar.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut file = File::create(path)?;
        let mut reader = bar.wrap_read(response);
        io::copy(&mut reader, &mut file).map_err(|e| FontScoutError::DownloadFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        bar.finish_and_clear();
        Ok(())
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}
